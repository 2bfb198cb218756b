//! Utility functions shared across the application.
//!
//! - [`url_validator`] - Syntactic URL acceptance check

pub mod url_validator;
