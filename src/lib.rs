//! # Short URL Service
//!
//! A small URL shortening service built with Axum: submit a URL, receive a
//! numeric short id, follow the id to be redirected to the original.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the store trait
//! - **Application Layer** ([`application`]) - Validation and shortening logic
//! - **Infrastructure Layer** ([`infrastructure`]) - Stores and host resolution
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Sequential numeric short ids, stable across resubmission of the same URL
//! - In-memory store by default, Redis for durable shared state
//! - Optional DNS gate rejecting URLs whose host does not resolve
//! - Content negotiation on lookups: redirect, or the JSON record on request
//!
//! ## Quick Start
//!
//! ```bash
//! # Defaults: in-memory store listening on 0.0.0.0:3000
//! cargo run
//!
//! # Or keep links in Redis
//! export STORE_BACKEND="redis"
//! export REDIS_URL="redis://localhost:6379/0"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::LinkRecord;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
