//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::LinkRecord;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::dns::HostProbe;
use crate::utils::url_validator::is_valid_url;
use tracing::debug;

/// Service for creating and resolving shortened links.
///
/// Validates submitted URLs, optionally checks that their host resolves,
/// and hands storage to the configured repository. Deduplication and id
/// allocation are the store's job; the service never assigns ids itself.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    host_probe: Arc<dyn HostProbe>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn LinkRepository>, host_probe: Arc<dyn HostProbe>) -> Self {
        Self {
            repository,
            host_probe,
        }
    }

    /// Returns the record for `url`, creating one if it is new.
    ///
    /// The URL is kept exactly as submitted; spellings that differ only in
    /// case are distinct entries. Resubmitting a known URL returns its
    /// original id without consuming a new one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the URL fails the syntactic check
    /// or, with DNS checking enabled, its host does not resolve. Store
    /// failures surface as [`AppError::Unavailable`] or [`AppError::Internal`].
    pub async fn shorten(&self, url: &str) -> Result<LinkRecord, AppError> {
        if !is_valid_url(url) {
            debug!("Rejected URL failing syntactic check: {}", url);
            return Err(AppError::InvalidUrl);
        }

        if !self.host_probe.is_resolvable(url).await {
            debug!("Rejected URL with unresolvable host: {}", url);
            return Err(AppError::InvalidUrl);
        }

        let record = self.repository.resolve_or_create(url).await?;
        debug!("Resolved {} -> {}", record.original_url, record.short_id);
        Ok(record)
    }

    /// Looks up a record by its short id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id was never allocated.
    /// A store that cannot answer surfaces as [`AppError::Unavailable`],
    /// never as not-found.
    pub async fn resolve(&self, id: u64) -> Result<LinkRecord, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Returns a snapshot of every stored record, ordered by ascending id.
    pub async fn list(&self) -> Result<Vec<LinkRecord>, AppError> {
        Ok(self.repository.list_all().await?)
    }

    /// Reports whether the backing store currently answers requests.
    pub async fn store_healthy(&self) -> bool {
        self.repository.health_check().await
    }
}
