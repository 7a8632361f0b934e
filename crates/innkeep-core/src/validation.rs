//! Validation utilities.

use crate::InnkeepError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns an `InnkeepError` on failure.
    fn validate_request(&self) -> Result<(), InnkeepError> {
        self.validate().map_err(validation_errors_to_innkeep_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to a single `InnkeepError::Validation`.
///
/// Fields are reported in name order so the message is stable.
#[must_use]
pub fn validation_errors_to_innkeep_error(errors: ValidationErrors) -> InnkeepError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                format!("{}: {}", field, message)
            })
        })
        .collect();
    messages.sort();

    InnkeepError::Validation(messages.join("; "))
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates that a nightly price is strictly positive.
    pub fn positive_price(value: f64) -> Result<(), ValidationError> {
        if value.is_nan() || value <= 0.0 {
            return Err(ValidationError::new("price_must_be_positive"));
        }
        Ok(())
    }

    /// Validates that a phone number is exactly ten digits.
    pub fn ten_digit_phone(value: &str) -> Result<(), ValidationError> {
        if value.len() != 10 || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::new("phone_must_be_ten_digits"));
        }
        Ok(())
    }
}
