use std::collections::HashSet;
use std::sync::Arc;

use shorturl::domain::repositories::LinkRepository;
use shorturl::infrastructure::persistence::MemoryLinkRepository;

#[tokio::test]
async fn test_memory_store_assigns_sequential_ids() {
    let repo = MemoryLinkRepository::new();

    let first = repo.resolve_or_create("https://example.com/a").await.unwrap();
    let second = repo.resolve_or_create("https://example.com/b").await.unwrap();
    let third = repo.resolve_or_create("https://example.com/c").await.unwrap();

    assert_eq!(first.short_id, 1);
    assert_eq!(second.short_id, 2);
    assert_eq!(third.short_id, 3);
}

#[tokio::test]
async fn test_memory_store_resubmission_is_idempotent() {
    let repo = MemoryLinkRepository::new();

    let first = repo.resolve_or_create("https://example.com").await.unwrap();
    let second = repo.resolve_or_create("https://example.com").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(repo.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_memory_store_find_by_id() {
    let repo = MemoryLinkRepository::new();
    let created = repo.resolve_or_create("https://example.com").await.unwrap();

    let found = repo.find_by_id(created.short_id).await.unwrap();

    assert_eq!(found, Some(created));
}

#[tokio::test]
async fn test_memory_store_find_unknown_returns_none() {
    let repo = MemoryLinkRepository::new();

    let found = repo.find_by_id(42).await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn test_memory_store_list_is_ordered_by_id() {
    let repo = MemoryLinkRepository::new();
    for url in [
        "https://example.com/z",
        "https://example.com/a",
        "https://example.com/m",
    ] {
        repo.resolve_or_create(url).await.unwrap();
    }

    let records = repo.list_all().await.unwrap();

    let ids: Vec<u64> = records.iter().map(|r| r.short_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(records[1].original_url, "https://example.com/a");
}

#[tokio::test]
async fn test_memory_store_urls_differing_in_case_are_distinct() {
    let repo = MemoryLinkRepository::new();

    let lower = repo.resolve_or_create("https://example.com/page").await.unwrap();
    let upper = repo.resolve_or_create("https://example.com/PAGE").await.unwrap();

    assert_ne!(lower.short_id, upper.short_id);
}

#[tokio::test]
async fn test_memory_store_seeded_urls_resolve() {
    let repo = MemoryLinkRepository::with_urls([
        "https://example.com/a",
        "https://example.com/b",
        "https://example.com/a",
    ])
    .unwrap();

    let found = repo.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(found.original_url, "https://example.com/a");
    assert_eq!(repo.list_all().await.unwrap().len(), 2);

    // Live submissions continue where the seed left off.
    let next = repo.resolve_or_create("https://example.com/c").await.unwrap();
    assert_eq!(next.short_id, 3);
}

#[tokio::test]
async fn test_memory_store_reports_healthy() {
    let repo = MemoryLinkRepository::new();

    assert!(repo.health_check().await);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_memory_store_concurrent_submissions_share_one_id() {
    let repo = Arc::new(MemoryLinkRepository::new());

    let mut handles = Vec::new();
    for _ in 0..32 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.resolve_or_create("https://example.com/race").await
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap().unwrap().short_id);
    }

    assert_eq!(ids.len(), 1);
    assert_eq!(repo.list_all().await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_memory_store_concurrent_distinct_urls_get_distinct_ids() {
    let repo = Arc::new(MemoryLinkRepository::new());

    let mut handles = Vec::new();
    for n in 0..16 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.resolve_or_create(&format!("https://example.com/{n}"))
                .await
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap().unwrap().short_id);
    }

    // Every submission got its own id and none were skipped.
    assert_eq!(ids, (1..=16).collect::<HashSet<u64>>());
}
