//! Top-level router configuration combining API and static routes.
//!
//! # Route Structure
//!
//! - `GET  /health`              - Health check: store reachability
//! - `POST /api/shorturl`        - Create (or look up) a short URL
//! - `GET  /api/shorturl`        - List all stored links
//! - `GET  /api/shorturl/{id}`   - Redirect to the stored URL
//! - everything else             - Static files from the public directory
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive cross-origin policy for the JSON API
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `public_dir` - directory served for paths no route claims; directory
///   requests fall back to its `index.html`
pub fn app_router(state: AppState, public_dir: &str) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .fallback_service(ServeDir::new(public_dir).append_index_html_on_directories(true))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    // `/api/shorturl/` and `/api/shorturl` resolve to the same route.
    NormalizePathLayer::trim_trailing_slash().layer(router)
}
