//! Bearer token gate placed in front of protected routes

use std::sync::Arc;

use crate::domain::entities::token::SessionIdentity;
use crate::errors::{AuthorizationError, DomainResult, TokenError};
use crate::repositories::AccountDirectory;
use crate::services::token::TokenService;

use super::types::GateState;

/// Resolves an Authorization header to an authenticated, active account
pub struct SessionGate {
    tokens: Arc<TokenService>,
    directory: Arc<dyn AccountDirectory>,
}

impl SessionGate {
    pub fn new(tokens: Arc<TokenService>, directory: Arc<dyn AccountDirectory>) -> Self {
        Self { tokens, directory }
    }

    /// Walk the header through the gate
    ///
    /// Only an account directory failure is returned as `Err`; every
    /// authentication outcome is a [`GateState`].
    pub async fn evaluate(&self, authorization: Option<&str>) -> DomainResult<GateState> {
        let header = match authorization {
            Some(header) => header,
            None => return Ok(GateState::NoHeader),
        };

        let token = match extract_bearer_token(header) {
            Some(token) => token,
            None => return Ok(GateState::Malformed),
        };

        let claims = match self.tokens.verify_access_token(token) {
            Ok(claims) => claims,
            Err(TokenError::TokenExpired) => return Ok(GateState::Expired),
            Err(_) => return Ok(GateState::InvalidSignature),
        };

        match self.directory.find_by_id(&claims.sub).await? {
            Some(account) if account.is_active => Ok(GateState::Valid(
                SessionIdentity::from_claims(&claims, account.phone_number),
            )),
            _ => Ok(GateState::UnknownSubject),
        }
    }

    /// Authenticate a request, mapping each non-valid state to its error
    pub async fn authenticate(&self, authorization: Option<&str>) -> DomainResult<SessionIdentity> {
        let state = self.evaluate(authorization).await?;
        if !state.is_valid() {
            tracing::warn!(
                state = state.label(),
                event = "session_rejected",
                "Request rejected by session gate"
            );
        }
        state.into_result()
    }
}

/// Ensure the caller acts on their own resources only
pub fn verify_owner(identity: &SessionIdentity, target_subject: &str) -> DomainResult<()> {
    if identity.subject == target_subject {
        Ok(())
    } else {
        tracing::warn!(
            subject = %identity.subject,
            target = %target_subject,
            event = "owner_check_failed",
            "Caller attempted to access another account"
        );
        Err(AuthorizationError::Forbidden.into())
    }
}

/// Extract the token from `Bearer <token>`
///
/// Exactly two whitespace-separated parts are accepted and the scheme is
/// compared case-insensitively.
pub fn extract_bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Some(token),
        _ => None,
    }
}
