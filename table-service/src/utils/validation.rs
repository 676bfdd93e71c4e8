//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Lengths are counted in characters, not bytes, so accented dish names
//! are not penalized.

use rust_decimal::Decimal;
use shared::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: menu item, category, restaurant
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions shown on the menu
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// Customer note attached to a waiter call
pub const MAX_NOTE_LEN: usize = shared::models::MAX_REQUEST_NOTE_LEN;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty"))
            .with_detail("field", field));
    }
    validate_len(value, field, max_len, ErrorCode::ValidationFailed)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_len(v, field, max_len, ErrorCode::ValidationFailed),
        None => Ok(()),
    }
}

/// Validate a customer note (already trimmed).
pub fn validate_note(note: Option<&str>) -> Result<(), AppError> {
    match note {
        Some(v) => validate_len(v, "note", MAX_NOTE_LEN, ErrorCode::NoteTooLong),
        None => Ok(()),
    }
}

/// Validate that a price is not negative.
pub fn validate_price(price: Decimal) -> Result<(), AppError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(AppError::new(ErrorCode::MenuItemInvalidPrice)
            .with_detail("price", price.to_string()));
    }
    Ok(())
}

fn validate_len(value: &str, field: &str, max_len: usize, code: ErrorCode) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::with_message(
            code,
            format!("{field} is too long ({len} chars, max {max_len})"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Pasta", "name", MAX_NAME_LEN).is_ok());
        let err = validate_required_text("   ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(validate_required_text(&"x".repeat(201), "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_note_counts_chars_not_bytes() {
        let accented = "é".repeat(200);
        assert!(validate_note(Some(&accented)).is_ok());

        let too_long = "a".repeat(201);
        let err = validate_note(Some(&too_long)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NoteTooLong);
        assert!(validate_note(None).is_ok());
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(None, "description", 10).is_ok());
        assert!(validate_optional_text(Some(""), "description", 10).is_ok());
        assert!(validate_optional_text(Some("way too long"), "description", 10).is_err());
    }

    #[test]
    fn test_price() {
        assert!(validate_price(Decimal::ZERO).is_ok());
        assert!(validate_price(Decimal::new(899, 2)).is_ok());
        let err = validate_price(Decimal::new(-1, 2)).unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemInvalidPrice);
    }
}
