//! Link repository implementations.
//!
//! Concrete implementations of the domain repository trait, selected at
//! startup via the `STORE_BACKEND` setting.
//!
//! # Repositories
//!
//! - [`MemoryLinkRepository`] - single-process store with no external service
//! - [`RedisLinkRepository`] - shared store for multi-instance deployments

pub mod memory_link_repository;
pub mod redis_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use redis_link_repository::RedisLinkRepository;
