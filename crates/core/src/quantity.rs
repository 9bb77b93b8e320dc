//! Ingredient quantity parsing.
//!
//! Quantities arrive as form text and are stored as doubles. A string that
//! does not parse to a finite number is a data-entry error and is rejected
//! before anything touches the database.

use crate::error::CoreError;

/// Parse quantity text into a finite `f64`.
///
/// Input is trimmed first. Rejects empty text, non-numeric text, and the
/// non-finite spellings (`NaN`, `inf`) that `f64::from_str` would otherwise
/// accept.
pub fn parse_quantity(text: &str) -> Result<f64, CoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "ingredient quantity is required".to_string(),
        ));
    }

    let value: f64 = trimmed.parse().map_err(|_| {
        CoreError::Validation(format!("ingredient quantity '{trimmed}' is not a number"))
    })?;

    if !value.is_finite() {
        return Err(CoreError::Validation(format!(
            "ingredient quantity '{trimmed}' is not a finite number"
        )));
    }

    Ok(value)
}
