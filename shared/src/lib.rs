//! Shared types for the table service
//!
//! Data model, error types, and small utilities used by the
//! storage/context layer and by the HTTP API.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
