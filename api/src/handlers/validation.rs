//! Request body validation

use fe_core::errors::{DomainError, ValidationError};
use validator::Validate;

use super::error::ApiError;

/// Validate a request DTO, reporting the first offending field
///
/// Empty required fields become `RequiredField`; anything else `InvalidFormat`.
pub fn validate_request<T: Validate>(request: &T) -> Result<(), ApiError> {
    let errors = match request.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };

    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let error = match fields.first() {
        Some((field, details)) => {
            let too_short = details.iter().any(|e| {
                e.code == "length"
                    && e.params.get("value").and_then(|v| v.as_str()) == Some("")
            });
            if too_short {
                ValidationError::RequiredField {
                    field: field.to_string(),
                }
            } else {
                ValidationError::InvalidFormat {
                    field: field.to_string(),
                }
            }
        }
        None => ValidationError::InvalidFormat {
            field: "body".to_string(),
        },
    };

    Err(ApiError(DomainError::Validation(error)))
}
