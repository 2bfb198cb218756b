mod common;

use axum::body::Bytes;
use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use shorturl::api::handlers::shorten_handler;

fn shorten_app() -> TestServer {
    let app = Router::new()
        .route("/api/shorturl", post(shorten_handler))
        .with_state(common::create_test_state());

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_shorten_assigns_sequential_ids() {
    let server = shorten_app();

    let response = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "original_url": "https://example.com", "short_url": 1 })
    );

    let response = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://example.org" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "original_url": "https://example.org", "short_url": 2 })
    );
}

#[tokio::test]
async fn test_shorten_resubmission_returns_existing_id() {
    let server = shorten_app();

    let first = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://dedup.example.com" }))
        .await
        .json::<serde_json::Value>();

    let second = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://dedup.example.com" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(first["short_url"], second["short_url"]);

    // A different URL still gets the next free id, not a skipped one.
    let third = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://other.example.com" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(third["short_url"], 2);
}

#[tokio::test]
async fn test_shorten_preserves_url_exactly() {
    let server = shorten_app();

    let url = "https://Example.COM/Path?Q=1&q=2#Frag";
    let response = server.post("/api/shorturl").json(&json!({ "url": url })).await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["original_url"], url);
}

#[tokio::test]
async fn test_shorten_rejects_url_without_http_scheme() {
    let server = shorten_app();

    for url in ["ftp://example.com", "example.com", "://missing-scheme.com"] {
        let response = server.post("/api/shorturl").json(&json!({ "url": url })).await;

        // The contract answers validation failures with 200 and an error body.
        response.assert_status_ok();
        assert_eq!(
            response.json::<serde_json::Value>(),
            json!({ "error": "invalid url" })
        );
    }
}

#[tokio::test]
async fn test_shorten_invalid_url_does_not_consume_an_id() {
    let server = shorten_app();

    server
        .post("/api/shorturl")
        .json(&json!({ "url": "not-a-url" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.json::<serde_json::Value>()["short_url"], 1);
}

#[tokio::test]
async fn test_shorten_requires_body() {
    let server = shorten_app();

    let response = server.post("/api/shorturl").await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "Request body is required" })
    );
}

#[tokio::test]
async fn test_shorten_rejects_malformed_json() {
    let server = shorten_app();

    let response = server
        .post("/api/shorturl")
        .bytes(Bytes::from_static(b"{\"url\": "))
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "Invalid request body" })
    );
}

#[tokio::test]
async fn test_shorten_requires_url_field() {
    let server = shorten_app();

    for body in [
        json!({}),
        json!({ "link": "https://example.com" }),
        json!({ "url": "" }),
        json!({ "url": 42 }),
    ] {
        let response = server.post("/api/shorturl").json(&body).await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<serde_json::Value>(),
            json!({ "error": "url is required" })
        );
    }
}

#[tokio::test]
async fn test_shorten_accepts_form_body() {
    let server = shorten_app();

    let response = server
        .post("/api/shorturl")
        .form(&[("url", "https://form.example.com/page")])
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "original_url": "https://form.example.com/page", "short_url": 1 })
    );
}

#[tokio::test]
async fn test_shorten_form_body_without_url_field() {
    let server = shorten_app();

    let response = server
        .post("/api/shorturl")
        .form(&[("link", "https://example.com")])
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "url is required" })
    );
}
