//! Repository trait for short link data access.

use crate::domain::entities::LinkRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Failures a link store can report.
///
/// `Unavailable` covers everything transient: connection loss, timed-out
/// operations, a poisoned lock. It is distinct from a successful lookup
/// that finds nothing, which is `Ok(None)`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store could not be reached or did not answer in time.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Every representable id has been handed out.
    #[error("short id space exhausted")]
    IdSpaceExhausted,
}

/// Repository interface for managing short links.
///
/// A store keeps a bidirectional mapping between original URLs and numeric
/// short ids. Ids are allocated sequentially starting at 1 and are never
/// reused; the URL is the unique key, compared byte for byte.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process store
/// - [`crate::infrastructure::persistence::RedisLinkRepository`] - Redis-backed store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Returns the record for `url`, creating it if absent.
    ///
    /// The check-then-insert is atomic: two concurrent calls with the same
    /// URL observe the same id, and ids allocated under contention have no
    /// gaps. Resubmitting a known URL never consumes an id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdSpaceExhausted`] once no further id can be
    /// allocated. Returns [`StoreError::Unavailable`] on backend failures.
    async fn resolve_or_create(&self, url: &str) -> Result<LinkRecord, StoreError>;

    /// Finds a record by its short id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(LinkRecord))` if found
    /// - `Ok(None)` if no record carries that id
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on backend failures.
    async fn find_by_id(&self, id: u64) -> Result<Option<LinkRecord>, StoreError>;

    /// Returns a snapshot of every record, ordered by ascending id.
    ///
    /// The snapshot is taken at a single point in time; records created
    /// while the caller iterates it are not spliced in.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on backend failures.
    async fn list_all(&self) -> Result<Vec<LinkRecord>, StoreError>;

    /// Reports whether the backing store currently answers requests.
    ///
    /// Used by the health endpoint; never errors, a failed probe is `false`.
    async fn health_check(&self) -> bool;
}
