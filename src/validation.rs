use crate::constants::{MAX_CATEGORY_DESCRIPTION_LEN, MAX_ITEM_NAME_LEN};
use crate::error::AppError;

/// Parse a decimal form value such as a quantity or price.
pub fn parse_decimal(field: &'static str, value: &str) -> Result<f64, AppError> {
    let parsed: f64 = value.trim().parse().map_err(|_| AppError::InvalidInput {
        field,
        reason: format!("'{}' is not a number", value.trim()),
    })?;

    if !parsed.is_finite() {
        return Err(AppError::InvalidInput {
            field,
            reason: "must be a finite number".into(),
        });
    }
    Ok(parsed)
}

/// Parse an integer form or path value (ids, priorities).
pub fn parse_integer(field: &'static str, value: &str) -> Result<i64, AppError> {
    value.trim().parse().map_err(|_| AppError::InvalidInput {
        field,
        reason: format!("'{}' is not an integer", value.trim()),
    })
}

fn validate_text<'a>(field: &'static str, value: &'a str, max_len: usize) -> Result<&'a str, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::InvalidInput {
            field,
            reason: "cannot be empty".into(),
        });
    }
    if value.chars().count() > max_len {
        return Err(AppError::InvalidInput {
            field,
            reason: format!("cannot exceed {max_len} characters"),
        });
    }
    Ok(value)
}

/// Validate category description.
pub fn validate_category_description(description: &str) -> Result<&str, AppError> {
    validate_text("description", description, MAX_CATEGORY_DESCRIPTION_LEN)
}

/// Validate item name.
pub fn validate_item_name(name: &str) -> Result<&str, AppError> {
    validate_text("name", name, MAX_ITEM_NAME_LEN)
}
