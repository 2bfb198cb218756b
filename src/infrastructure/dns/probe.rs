//! Host probe trait.

use async_trait::async_trait;

/// Trait for checking that a URL points at a resolvable host.
///
/// Probes sit in front of the store as an optional acceptance gate. They
/// never error: a URL whose host cannot be checked is simply reported as
/// not resolvable, and the service turns that into its ordinary
/// invalid-URL answer.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::DnsProbe`] - real DNS resolution
/// - [`crate::infrastructure::dns::NullProbe`] - accepts everything
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostProbe: Send + Sync {
    /// Reports whether the host named in `url` resolves.
    ///
    /// # Returns
    ///
    /// - `true` if the host resolved to at least one address
    /// - `false` if resolution failed, timed out, or `url` has no
    ///   extractable host
    async fn is_resolvable(&self, url: &str) -> bool;
}
