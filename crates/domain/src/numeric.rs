//! Numeric coercion for property fields submitted as text.
//!
//! Listing forms post every value as a string, so `price`, `size`,
//! `bedrooms` and `bathrooms` arrive as `"250000"`, `"72.5"`, `"3"`. These
//! helpers turn that text into typed values and reject anything that is not
//! a plain, finite, non-negative number instead of storing `NaN`.

use crate::error::ValidationError;

/// Parse a finite, non-negative decimal such as a price or a surface area.
///
/// Leading and trailing whitespace is ignored.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidNumber`] when `text` is empty, is not a
/// number, or names a non-finite value (`NaN`, `inf`), and
/// [`ValidationError::OutOfRange`] when the number is negative.
pub fn parse_decimal(field: &'static str, text: &str) -> Result<f64, ValidationError> {
    let trimmed = text.trim();
    let value: f64 = trimmed.parse().map_err(|_| invalid(field, text))?;
    if !value.is_finite() {
        return Err(invalid(field, text));
    }
    check_decimal(field, value)
}

/// Parse a non-negative whole number such as a bedroom count.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidNumber`] when `text` is not an integer,
/// and [`ValidationError::OutOfRange`] when it is negative or too large.
pub fn parse_count(field: &'static str, text: &str) -> Result<u32, ValidationError> {
    let value: i64 = text.trim().parse().map_err(|_| invalid(field, text))?;
    u32::try_from(value).map_err(|_| ValidationError::OutOfRange { field })
}

/// Like [`parse_decimal`], but blank text means "not provided".
///
/// # Errors
///
/// See [`parse_decimal`].
pub fn parse_optional_decimal(
    field: &'static str,
    text: &str,
) -> Result<Option<f64>, ValidationError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_decimal(field, text).map(Some)
}

/// Like [`parse_count`], but blank text means "not provided".
///
/// # Errors
///
/// See [`parse_count`].
pub fn parse_optional_count(
    field: &'static str,
    text: &str,
) -> Result<Option<u32>, ValidationError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_count(field, text).map(Some)
}

/// Check that an already-typed decimal is finite and non-negative.
///
/// `-0.0` is accepted and returned as `0.0`.
///
/// # Errors
///
/// Returns [`ValidationError::OutOfRange`] otherwise.
pub fn check_decimal(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value + 0.0)
    } else {
        Err(ValidationError::OutOfRange { field })
    }
}

fn invalid(field: &'static str, text: &str) -> ValidationError {
    ValidationError::InvalidNumber {
        field,
        value: text.to_string(),
    }
}
