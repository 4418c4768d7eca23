//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{
    AuthError, AuthorizationError, ConfigurationError, DependencyError, TokenError,
    ValidationError,
};

use fe_shared::error_codes;
use thiserror::Error;

/// Coarse classification used to pick a transport status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Dependency,
    Validation,
    Authentication,
    Authorization,
    Internal,
}

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Dependency(#[from] DependencyError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Authorization(#[from] AuthorizationError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Failure family of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Configuration(_) => ErrorKind::Configuration,
            DomainError::Dependency(_) => ErrorKind::Dependency,
            DomainError::Validation(ValidationError::MalformedAuthorization) => {
                ErrorKind::Authentication
            }
            DomainError::Validation(_) => ErrorKind::Validation,
            DomainError::Auth(AuthError::OtpInvalid)
            | DomainError::Auth(AuthError::OtpExpired)
            | DomainError::Auth(AuthError::OtpNotIssued) => ErrorKind::Validation,
            DomainError::Auth(_) => ErrorKind::Authentication,
            DomainError::Authorization(_) => ErrorKind::Authorization,
            DomainError::Token(TokenError::TokenGenerationFailed) => ErrorKind::Internal,
            DomainError::Token(_) => ErrorKind::Authentication,
            DomainError::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Configuration(e) => match e {
                ConfigurationError::MissingCredentials { .. } => {
                    error_codes::MISSING_CREDENTIALS_CONFIG
                }
                ConfigurationError::MissingSender => error_codes::MISSING_SENDER,
                ConfigurationError::InvalidTemplateId { .. } => error_codes::INVALID_TEMPLATE_ID,
                ConfigurationError::InvalidSetting { .. } => error_codes::INVALID_SETTING,
            },
            DomainError::Dependency(e) => match e {
                DependencyError::SmsGateway { .. } => error_codes::SMS_ERROR,
                DependencyError::AccountDirectory { .. } => error_codes::DIRECTORY_ERROR,
            },
            DomainError::Validation(e) => match e {
                ValidationError::MalformedAuthorization => error_codes::MALFORMED_AUTHORIZATION,
                ValidationError::InvalidPhoneFormat => error_codes::PHONE_INVALID,
                ValidationError::RequiredField { .. } | ValidationError::InvalidFormat { .. } => {
                    error_codes::VALIDATION_ERROR
                }
            },
            DomainError::Auth(e) => match e {
                AuthError::MissingCredentials => error_codes::MISSING_CREDENTIALS,
                AuthError::InvalidToken => error_codes::TOKEN_INVALID,
                AuthError::TokenExpired => error_codes::TOKEN_EXPIRED,
                AuthError::AccountNotFound => error_codes::ACCOUNT_NOT_FOUND,
                AuthError::OtpInvalid => error_codes::OTP_INVALID,
                AuthError::OtpExpired => error_codes::OTP_EXPIRED,
                AuthError::OtpNotIssued => error_codes::OTP_NOT_ISSUED,
            },
            DomainError::Authorization(AuthorizationError::Forbidden) => error_codes::FORBIDDEN,
            DomainError::Token(e) => match e {
                TokenError::TokenExpired => error_codes::TOKEN_EXPIRED,
                TokenError::TokenGenerationFailed => error_codes::INTERNAL_ERROR,
                _ => error_codes::TOKEN_INVALID,
            },
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
