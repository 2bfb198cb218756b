//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod list;
pub mod resolve;
pub mod shorten;

pub use health::health_handler;
pub use list::list_handler;
pub use resolve::resolve_handler;
pub use shorten::shorten_handler;
