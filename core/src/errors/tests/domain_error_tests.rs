//! Unit tests for domain error types

use crate::errors::{
    AuthError, AuthorizationError, ConfigurationError, DependencyError, DomainError, ErrorKind,
    TokenError, ValidationError,
};

#[test]
fn test_gate_failures_are_authentication_errors() {
    let cases: Vec<(DomainError, &str)> = vec![
        (AuthError::MissingCredentials.into(), "MISSING_CREDENTIALS"),
        (ValidationError::MalformedAuthorization.into(), "MALFORMED_AUTHORIZATION"),
        (AuthError::InvalidToken.into(), "TOKEN_INVALID"),
        (AuthError::TokenExpired.into(), "TOKEN_EXPIRED"),
        (AuthError::AccountNotFound.into(), "ACCOUNT_NOT_FOUND"),
    ];

    for (error, code) in cases {
        assert_eq!(error.kind(), ErrorKind::Authentication, "{code}");
        assert_eq!(error.code(), code);
    }
}

#[test]
fn test_otp_failures_are_validation_errors() {
    let error: DomainError = AuthError::OtpExpired.into();
    assert_eq!(error.kind(), ErrorKind::Validation);
    assert_eq!(error.code(), "OTP_EXPIRED");

    let error: DomainError = ValidationError::InvalidPhoneFormat.into();
    assert_eq!(error.kind(), ErrorKind::Validation);
    assert_eq!(error.code(), "PHONE_INVALID");
}

#[test]
fn test_forbidden_is_authorization_error() {
    let error: DomainError = AuthorizationError::Forbidden.into();
    assert_eq!(error.kind(), ErrorKind::Authorization);
    assert_eq!(error.code(), "FORBIDDEN");
}

#[test]
fn test_configuration_and_dependency_codes() {
    let error: DomainError = ConfigurationError::InvalidTemplateId { length: 10 }.into();
    assert_eq!(error.kind(), ErrorKind::Configuration);
    assert!(error.to_string().contains("10"));

    let error: DomainError = DependencyError::SmsGateway {
        message: "HTTP 500".to_string(),
    }
    .into();
    assert_eq!(error.kind(), ErrorKind::Dependency);
    assert_eq!(error.code(), "SMS_ERROR");
}

#[test]
fn test_token_generation_failure_is_internal() {
    let error: DomainError = TokenError::TokenGenerationFailed.into();
    assert_eq!(error.kind(), ErrorKind::Internal);
    assert_eq!(error.code(), "INTERNAL_ERROR");
}

#[test]
fn test_messages_are_transparent() {
    let error: DomainError = AuthError::MissingCredentials.into();
    assert_eq!(error.to_string(), "Authorization header is required");
}
