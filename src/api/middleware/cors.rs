//! Cross-origin resource sharing middleware.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Creates the CORS middleware for the public API.
///
/// Any origin may call the API, with the methods the endpoints serve
/// and the two headers clients send (`Content-Type` on creation,
/// `Accept` for negotiation). Pre-flight `OPTIONS` requests are
/// answered by the layer itself with an empty 200 and never reach a
/// handler.
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest("/api", api_routes())
///     .layer(cors::layer());
/// ```
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}
