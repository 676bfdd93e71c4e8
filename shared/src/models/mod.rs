//! Data models
//!
//! Shared between the context layer and the HTTP API.
//! Field names serialize in camelCase; all IDs are opaque strings and
//! all timestamps are Unix millis (`i64`).

pub mod menu_category;
pub mod menu_item;
pub mod restaurant;
pub mod service_request;

// Re-exports
pub use menu_category::*;
pub use menu_item::*;
pub use restaurant::*;
pub use service_request::*;
