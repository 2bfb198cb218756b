//! Shared application state.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::config::StoreBackend;

/// State shared across all request handlers.
///
/// Cloning is cheap: the service is behind an `Arc` and the backend
/// tag is `Copy`.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Which store backs the service, reported by the health endpoint.
    pub store_backend: StoreBackend,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>, store_backend: StoreBackend) -> Self {
        Self {
            link_service,
            store_backend,
        }
    }
}
