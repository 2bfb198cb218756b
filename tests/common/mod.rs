#![allow(dead_code)]

use std::sync::Arc;

use shorturl::application::services::LinkService;
use shorturl::config::StoreBackend;
use shorturl::infrastructure::dns::NullProbe;
use shorturl::infrastructure::persistence::MemoryLinkRepository;
use shorturl::state::AppState;

/// Builds application state backed by a fresh in-memory store.
///
/// Host resolution is disabled so tests never touch the network.
pub fn create_test_state() -> AppState {
    let link_service = Arc::new(LinkService::new(
        Arc::new(MemoryLinkRepository::new()),
        Arc::new(NullProbe::new()),
    ));

    AppState::new(link_service, StoreBackend::Memory)
}

/// Stores a URL through the service and returns its short id.
pub async fn seed_link(state: &AppState, url: &str) -> u64 {
    state
        .link_service
        .shorten(url)
        .await
        .expect("failed to seed link")
        .short_id
}
