//! Unified error codes for the table service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Menu and restaurant errors
//! - 7xxx: Table request errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,

    // ==================== 6xxx: Menu ====================
    /// Restaurant profile not found
    RestaurantNotFound = 6001,
    /// Menu item not found
    MenuItemNotFound = 6101,
    /// Menu item price is negative or malformed
    MenuItemInvalidPrice = 6102,
    /// Category not found
    CategoryNotFound = 6201,
    /// Category still has menu items assigned
    CategoryHasItems = 6202,

    // ==================== 7xxx: Table requests ====================
    /// Service request not found
    RequestNotFound = 7001,
    /// Service request is already completed
    RequestAlreadyCompleted = 7002,
    /// Status change not allowed from the current status
    InvalidStatusTransition = 7003,
    /// Request note exceeds the length limit
    NoteTooLong = 7004,

    // ==================== 9xxx: System ====================
    /// Persistent storage failure
    StorageError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",

            ErrorCode::RestaurantNotFound => "Restaurant not found",
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::MenuItemInvalidPrice => "Menu item price must not be negative",
            ErrorCode::CategoryNotFound => "Category not found",
            ErrorCode::CategoryHasItems => {
                "Cannot delete category with menu items. Move or delete the items first."
            }

            ErrorCode::RequestNotFound => "Request not found",
            ErrorCode::RequestAlreadyCompleted => "Request is already completed",
            ErrorCode::InvalidStatusTransition => "Request status cannot move backwards",
            ErrorCode::NoteTooLong => "Request note is too long",

            ErrorCode::StorageError => "Storage error",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Raised when a numeric value does not map to a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),

            // Menu
            6001 => Ok(ErrorCode::RestaurantNotFound),
            6101 => Ok(ErrorCode::MenuItemNotFound),
            6102 => Ok(ErrorCode::MenuItemInvalidPrice),
            6201 => Ok(ErrorCode::CategoryNotFound),
            6202 => Ok(ErrorCode::CategoryHasItems),

            // Table requests
            7001 => Ok(ErrorCode::RequestNotFound),
            7002 => Ok(ErrorCode::RequestAlreadyCompleted),
            7003 => Ok(ErrorCode::InvalidStatusTransition),
            7004 => Ok(ErrorCode::NoteTooLong),

            // System
            9002 => Ok(ErrorCode::StorageError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);

        assert_eq!(ErrorCode::RestaurantNotFound.code(), 6001);
        assert_eq!(ErrorCode::MenuItemNotFound.code(), 6101);
        assert_eq!(ErrorCode::CategoryHasItems.code(), 6202);

        assert_eq!(ErrorCode::RequestNotFound.code(), 7001);
        assert_eq!(ErrorCode::RequestAlreadyCompleted.code(), 7002);
        assert_eq!(ErrorCode::InvalidStatusTransition.code(), 7003);

        assert_eq!(ErrorCode::StorageError.code(), 9002);
    }

    #[test]
    fn test_try_from_known_and_unknown() {
        assert_eq!(ErrorCode::try_from(7002), Ok(ErrorCode::RequestAlreadyCompleted));
        assert_eq!(ErrorCode::try_from(6202), Ok(ErrorCode::CategoryHasItems));
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::CategoryHasItems).unwrap();
        assert_eq!(json, "6202");
        let code: ErrorCode = serde_json::from_str("7001").unwrap();
        assert_eq!(code, ErrorCode::RequestNotFound);
        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::NotFound.to_string(), "E0003");
        assert_eq!(ErrorCode::RequestNotFound.to_string(), "E7001");
    }
}
