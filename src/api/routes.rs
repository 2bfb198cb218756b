//! API route configuration.

use crate::api::handlers::{list_handler, resolve_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public API routes.
///
/// # Endpoints
///
/// - `POST /shorturl`      - Create (or re-resolve) a short URL
/// - `GET  /shorturl`      - List every stored mapping
/// - `GET  /shorturl/{id}` - Resolve an id to its URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorturl", post(shorten_handler).get(list_handler))
        .route("/shorturl/{id}", get(resolve_handler))
}
