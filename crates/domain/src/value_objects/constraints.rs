//! Field constraint checks shared by every entity setter.
//!
//! Each check returns the accepted value so setters can validate first and
//! assign second:
//!
//! ```
//! use follout_domain::value_objects::constraints::non_negative;
//!
//! assert_eq!(non_negative("luck", 3), Ok(3));
//! assert!(non_negative("luck", -1).is_err());
//! ```

use crate::error::DomainError;

/// Returns true when the string is empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Rejects values below zero.
pub fn non_negative(field: &'static str, value: i32) -> Result<i32, DomainError> {
    if value < 0 {
        return Err(DomainError::validation(field, "cannot be negative"));
    }
    Ok(value)
}

/// Rejects zero and values below zero.
pub fn positive(field: &'static str, value: i32) -> Result<i32, DomainError> {
    if value <= 0 {
        return Err(DomainError::validation(field, "must be positive"));
    }
    Ok(value)
}

/// Accepts absence, rejects a present-but-blank string.
pub fn optional_non_blank(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<String>, DomainError> {
    match value {
        Some(text) if is_blank(&text) => Err(DomainError::validation(
            field,
            "cannot be empty or whitespace",
        )),
        other => Ok(other),
    }
}

/// Rejects a blank string. There is no absent case.
pub fn required_non_blank(field: &'static str, value: String) -> Result<String, DomainError> {
    if is_blank(&value) {
        return Err(DomainError::validation(
            field,
            "cannot be empty or whitespace",
        ));
    }
    Ok(value)
}

/// Rejects an empty list and any blank element.
pub fn non_empty_items(field: &'static str, items: Vec<String>) -> Result<Vec<String>, DomainError> {
    if items.is_empty() {
        return Err(DomainError::validation(field, "cannot be empty"));
    }
    no_blank_items(field, &items)?;
    Ok(items)
}

/// Rejects blank elements without requiring the list to be populated.
pub(crate) fn no_blank_items(field: &'static str, items: &[String]) -> Result<(), DomainError> {
    if items.iter().any(|item| is_blank(item)) {
        return Err(DomainError::validation(
            field,
            "items cannot be empty or whitespace",
        ));
    }
    Ok(())
}
