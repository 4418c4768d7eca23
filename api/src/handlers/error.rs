//! Mapping of domain errors to HTTP responses
//!
//! The status is chosen from [`ErrorKind`] alone. The body is always the
//! shared [`ErrorResponse`] shape.

use actix_web::{
    error::JsonPayloadError,
    http::{header, StatusCode},
    HttpRequest, HttpResponse, ResponseError,
};
use fe_core::errors::{DependencyError, DomainError, ErrorKind, ValidationError};
use fe_shared::{error_codes, ErrorResponse};
use std::fmt;

/// Domain error carried to the HTTP boundary
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error.kind() {
        ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
        ErrorKind::Authorization => StatusCode::FORBIDDEN,
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Dependency => match error {
            DomainError::Dependency(DependencyError::SmsGateway { .. }) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::SERVICE_UNAVAILABLE,
        },
        ErrorKind::Configuration | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Client-facing message; server-side failures do not leak details
fn public_message(error: &DomainError) -> String {
    match error.kind() {
        ErrorKind::Configuration | ErrorKind::Internal => {
            "An internal error occurred. Please try again later.".to_string()
        }
        ErrorKind::Dependency => match error {
            DomainError::Dependency(DependencyError::SmsGateway { .. }) => {
                "Failed to send verification code. Please try again.".to_string()
            }
            _ => "Account service is temporarily unavailable. Please try again later.".to_string(),
        },
        _ => error.to_string(),
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(&self.0)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(code = self.0.code(), error = %self.0, "Request failed");
        } else {
            tracing::debug!(code = self.0.code(), error = %self.0, "Request rejected");
        }

        let body = ErrorResponse::new(self.0.code(), public_message(&self.0));
        let mut response = HttpResponse::build(status);
        if status == StatusCode::UNAUTHORIZED {
            response.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }
        response.json(body)
    }
}

/// Render malformed JSON bodies in the standard error shape
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let field = match &err {
        JsonPayloadError::ContentType => "content-type",
        _ => "body",
    };
    tracing::debug!(error = %err, "Rejected request body");
    ApiError(DomainError::Validation(ValidationError::InvalidFormat {
        field: field.to_string(),
    }))
    .into()
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
