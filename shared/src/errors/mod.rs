//! Shared error response structure and stable error codes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (field errors, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Stable error codes returned in the `error` field
pub mod error_codes {
    // Authentication (401)
    pub const MISSING_CREDENTIALS: &str = "MISSING_CREDENTIALS";
    pub const MALFORMED_AUTHORIZATION: &str = "MALFORMED_AUTHORIZATION";
    pub const TOKEN_INVALID: &str = "TOKEN_INVALID";
    pub const TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";
    pub const ACCOUNT_NOT_FOUND: &str = "ACCOUNT_NOT_FOUND";

    // OTP verification (400)
    pub const OTP_INVALID: &str = "OTP_INVALID";
    pub const OTP_EXPIRED: &str = "OTP_EXPIRED";
    pub const OTP_NOT_ISSUED: &str = "OTP_NOT_ISSUED";

    // Authorization (403)
    pub const FORBIDDEN: &str = "FORBIDDEN";

    // Validation (400)
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const PHONE_INVALID: &str = "PHONE_INVALID";

    // Configuration (500)
    pub const MISSING_CREDENTIALS_CONFIG: &str = "CONFIG_MISSING_CREDENTIALS";
    pub const MISSING_SENDER: &str = "CONFIG_MISSING_SENDER";
    pub const INVALID_TEMPLATE_ID: &str = "CONFIG_INVALID_TEMPLATE_ID";
    pub const INVALID_SETTING: &str = "CONFIG_INVALID_SETTING";

    // Dependencies (502 / 503)
    pub const SMS_ERROR: &str = "SMS_ERROR";
    pub const DIRECTORY_ERROR: &str = "DIRECTORY_ERROR";

    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serialization_omits_empty_details() {
        let response = ErrorResponse::new(error_codes::TOKEN_EXPIRED, "Token has expired");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["error"], "TOKEN_EXPIRED");
        assert_eq!(json["message"], "Token has expired");
        assert!(json.get("details").is_none());
        assert!(json.get("timestamp").is_some());
    }

    #[test]
    fn test_add_detail() {
        let response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "bad input")
            .add_detail("field", "phone_number");
        let details = response.details.unwrap();
        assert_eq!(details["field"], "phone_number");
    }
}
