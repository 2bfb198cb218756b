//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the core
//! concepts of the URL shortening service. Entities are plain data structures
//! without business logic.
//!
//! # Entity Types
//!
//! - [`LinkRecord`] - A stored URL-to-id mapping

pub mod link;

pub use link::LinkRecord;
