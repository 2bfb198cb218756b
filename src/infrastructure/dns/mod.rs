//! Optional host-resolution gate for submitted URLs.
//!
//! Provides a [`HostProbe`] trait with two implementations:
//! - [`DnsProbe`] - resolves hosts through the system resolver
//! - [`NullProbe`] - no-op implementation for disabled checking

mod dns_probe;
mod null_probe;
mod probe;

pub use dns_probe::DnsProbe;
pub use null_probe::NullProbe;
pub use probe::HostProbe;

#[cfg(test)]
pub use probe::MockHostProbe;
