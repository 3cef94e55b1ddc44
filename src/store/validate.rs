//! Reusable record validation rules
//!
//! Rules run once, when a collection is loaded; records are immutable
//! afterwards, so a loaded collection is valid for its whole lifetime.

use crate::core::error::{FieldValidationError, ValidationError};
use crate::core::field::{FieldFormat, FieldValue};

/// Rule: string field is present and non-blank
pub fn required() -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &FieldValue| match value.as_str() {
        Some(s) if !s.trim().is_empty() => Ok(()),
        Some(_) => Err(format!("Field '{}' must not be blank", field)),
        None => Err(format!("Field '{}' is required", field)),
    }
}

/// Rule: numeric field must not be negative
pub fn non_negative() -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &FieldValue| {
        if let Some(num) = value.as_f64() {
            if num < 0.0 {
                Err(format!(
                    "Field '{}' must not be negative (value: {})",
                    field, num
                ))
            } else {
                Ok(())
            }
        } else {
            Ok(())
        }
    }
}

/// Rule: numeric field within an inclusive range
pub fn within(
    min: f64,
    max: f64,
) -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &FieldValue| {
        if let Some(num) = value.as_f64() {
            if num < min || num > max {
                Err(format!(
                    "Field '{}' must be between {} and {} (value: {})",
                    field, min, max, num
                ))
            } else {
                Ok(())
            }
        } else {
            Ok(())
        }
    }
}

/// Rule: string field is one of the allowed values
pub fn one_of(
    allowed: &'static [&'static str],
) -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &FieldValue| {
        if let Some(s) = value.as_str() {
            if allowed.contains(&s) {
                Ok(())
            } else {
                Err(format!(
                    "Field '{}' must be one of [{}] (value: '{}')",
                    field,
                    allowed.join(", "),
                    s
                ))
            }
        } else {
            Ok(())
        }
    }
}

/// Rule: string field matches a format
pub fn format(
    fmt: FieldFormat,
) -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &FieldValue| {
        if value.is_null() {
            return Ok(());
        }
        if fmt.validate(value) {
            Ok(())
        } else {
            Err(format!("Field '{}' has an invalid format", field))
        }
    }
}

/// Apply one rule, collecting any failure
pub fn check(
    errors: &mut Vec<FieldValidationError>,
    field: &str,
    value: &FieldValue,
    rule: impl Fn(&str, &FieldValue) -> Result<(), String>,
) {
    if let Err(message) = rule(field, value) {
        errors.push(FieldValidationError {
            field: field.to_string(),
            message,
        });
    }
}

/// Turn collected failures into a result
pub fn finish(errors: Vec<FieldValidationError>) -> Result<(), ValidationError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::FieldErrors(errors))
    }
}
