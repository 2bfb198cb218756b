//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and host probing.
//!
//! # Modules
//!
//! - [`dns`] - Host-resolution probes (DNS and no-op implementations)
//! - [`persistence`] - In-memory and Redis repository implementations

pub mod dns;
pub mod persistence;
