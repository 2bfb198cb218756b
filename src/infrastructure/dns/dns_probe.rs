//! DNS-backed host probe.

use super::probe::HostProbe;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// How long one resolution attempt may take before the host counts as
/// not resolvable.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Host probe that resolves hostnames through the system resolver.
///
/// Catches URLs that are syntactically fine but point nowhere, like
/// `https://this-domain-does-not-exist-12345.com`. IP-literal hosts
/// resolve to themselves and always pass.
pub struct DnsProbe;

impl DnsProbe {
    /// Creates a new DnsProbe instance.
    pub fn new() -> Self {
        debug!("Using DnsProbe (host resolution enabled)");
        Self
    }
}

impl Default for DnsProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostProbe for DnsProbe {
    async fn is_resolvable(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            debug!("Host probe: cannot parse URL: {}", url);
            return false;
        };
        let Some(host) = parsed.host_str() else {
            debug!("Host probe: URL has no host: {}", url);
            return false;
        };
        let port = parsed.port_or_known_default().unwrap_or(80);

        match tokio::time::timeout(LOOKUP_TIMEOUT, tokio::net::lookup_host((host, port))).await {
            Ok(Ok(mut addrs)) => addrs.next().is_some(),
            Ok(Err(e)) => {
                debug!("Host probe: lookup failed for {}: {}", host, e);
                false
            }
            Err(_) => {
                debug!("Host probe: lookup timed out for {}", host);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_unparsable_url() {
        let probe = DnsProbe::new();
        assert!(!probe.is_resolvable("not a url at all").await);
    }

    #[tokio::test]
    async fn test_rejects_url_without_host() {
        let probe = DnsProbe::new();
        assert!(!probe.is_resolvable("data:text/plain,hello").await);
    }

    #[tokio::test]
    async fn test_accepts_loopback_ip_literal() {
        let probe = DnsProbe::new();
        assert!(probe.is_resolvable("http://127.0.0.1:8080/path").await);
    }
}
