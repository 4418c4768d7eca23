//! Error kinds raised by the authentication core
//!
//! Each enum covers one failure family. They are bridged into
//! [`DomainError`](super::DomainError) so callers can propagate with `?` and
//! the presentation layer can map them to HTTP statuses by kind.

use thiserror::Error;

/// Missing or malformed deployment settings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Missing credentials: {name} is not configured")]
    MissingCredentials { name: String },

    #[error("SMS sender identity is not configured")]
    MissingSender,

    #[error("Invalid SMS template id: expected 'HX' followed by 32 characters, got {length} characters")]
    InvalidTemplateId { length: usize },

    #[error("Invalid setting {name}: {reason}")]
    InvalidSetting { name: String, reason: String },
}

/// Failures reported by an external collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DependencyError {
    #[error("SMS gateway failure: {message}")]
    SmsGateway { message: String },

    #[error("Account directory failure: {message}")]
    AccountDirectory { message: String },
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid authorization format. Expected: Bearer <token>")]
    MalformedAuthorization,

    #[error("Invalid phone number format. Expected E.164, e.g. +15551234567")]
    InvalidPhoneFormat,

    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },
}

/// Authentication failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authorization header is required")]
    MissingCredentials,

    #[error("Invalid or expired token. Please login again.")]
    InvalidToken,

    #[error("Token has expired. Please login again.")]
    TokenExpired,

    #[error("User not found or deactivated.")]
    AccountNotFound,

    #[error("Invalid verification code")]
    OtpInvalid,

    #[error("Verification code has expired. Please request a new one.")]
    OtpExpired,

    #[error("No verification code was requested for this phone number")]
    OtpNotIssued,
}

/// Authorization failures for an authenticated caller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationError {
    #[error("You do not have permission to access this resource.")]
    Forbidden,
}

/// Token encoding and decoding failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
