//! No-op host probe for disabled DNS checking.

use super::probe::HostProbe;
use async_trait::async_trait;
use tracing::debug;

/// A host probe that accepts every URL.
///
/// Used when DNS checking is disabled, which is the default.
///
/// # Use Cases
///
/// - Deployments where syntactic validation is enough
/// - Test scenarios that must not touch the network
pub struct NullProbe;

impl NullProbe {
    /// Creates a new NullProbe instance.
    pub fn new() -> Self {
        debug!("Using NullProbe (host resolution disabled)");
        Self
    }
}

impl Default for NullProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostProbe for NullProbe {
    async fn is_resolvable(&self, _url: &str) -> bool {
        true
    }
}
