//! Session gate states

use crate::domain::entities::token::SessionIdentity;
use crate::errors::{AuthError, DomainError, ValidationError};

/// Where a request stopped in the gate, in evaluation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    /// No Authorization header
    NoHeader,
    /// Header present but not `Bearer <token>`
    Malformed,
    /// Token failed signature or claim checks
    InvalidSignature,
    /// Signature valid but the token has expired
    Expired,
    /// Subject does not resolve to an active account
    UnknownSubject,
    /// Authenticated caller
    Valid(SessionIdentity),
}

impl GateState {
    pub fn is_valid(&self) -> bool {
        matches!(self, GateState::Valid(_))
    }

    /// Identity for `Valid`, the matching authentication error otherwise
    pub fn into_result(self) -> Result<SessionIdentity, DomainError> {
        match self {
            GateState::Valid(identity) => Ok(identity),
            GateState::NoHeader => Err(AuthError::MissingCredentials.into()),
            GateState::Malformed => Err(ValidationError::MalformedAuthorization.into()),
            GateState::InvalidSignature => Err(AuthError::InvalidToken.into()),
            GateState::Expired => Err(AuthError::TokenExpired.into()),
            GateState::UnknownSubject => Err(AuthError::AccountNotFound.into()),
        }
    }

    /// Short label used in logs
    pub fn label(&self) -> &'static str {
        match self {
            GateState::NoHeader => "no_header",
            GateState::Malformed => "malformed",
            GateState::InvalidSignature => "invalid_signature",
            GateState::Expired => "expired",
            GateState::UnknownSubject => "unknown_subject",
            GateState::Valid(_) => "valid",
        }
    }
}
