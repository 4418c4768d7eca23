//! Main authentication service implementation

use fe_shared::phone::{is_valid_e164, mask_phone_number, normalize_phone_number};
use std::sync::Arc;

use crate::domain::entities::account::Account;
use crate::domain::entities::token::SessionIdentity;
use crate::domain::value_objects::{AuthSession, IssuedOtp, TokenInfo};
use crate::errors::{AuthError, DomainResult, ValidationError};
use crate::repositories::AccountDirectory;
use crate::services::otp::{OtpIssuer, OtpVerifier};
use crate::services::token::TokenService;

/// Authentication service for the phone OTP login flow
pub struct AuthService {
    /// Issues and delivers codes
    issuer: Arc<OtpIssuer>,
    /// Checks submitted codes
    verifier: Arc<OtpVerifier>,
    /// Mints session tokens
    tokens: Arc<TokenService>,
    /// External account directory
    directory: Arc<dyn AccountDirectory>,
}

impl AuthService {
    pub fn new(
        issuer: Arc<OtpIssuer>,
        verifier: Arc<OtpVerifier>,
        tokens: Arc<TokenService>,
        directory: Arc<dyn AccountDirectory>,
    ) -> Self {
        Self {
            issuer,
            verifier,
            tokens,
            directory,
        }
    }

    /// Send a login code to a phone number
    ///
    /// The number is normalised (spaces, dashes and brackets removed) and
    /// must be E.164.
    pub async fn send_code(&self, phone: &str) -> DomainResult<IssuedOtp> {
        let phone = validated_phone(phone)?;
        self.issuer.issue(&phone).await
    }

    /// Verify a login code and open a session
    ///
    /// This method:
    /// 1. Validates the phone number format
    /// 2. Checks and consumes the code
    /// 3. Finds the account by phone, creating it on first login
    /// 4. Rejects deactivated accounts
    /// 5. Mints an access token for the account
    pub async fn verify_code(&self, phone: &str, code: &str) -> DomainResult<AuthSession> {
        let phone = validated_phone(phone)?;

        let outcome = self.verifier.check(&phone, code);
        if let Some(error) = outcome.error() {
            return Err(error.into());
        }

        let (account, is_new_user) = match self.directory.find_by_phone(&phone).await? {
            Some(existing) => (existing, false),
            None => (self.directory.create(&phone).await?, true),
        };

        if !account.is_active {
            tracing::warn!(
                phone = %mask_phone_number(&phone),
                event = "login_inactive_account",
                "Login attempt for a deactivated account"
            );
            return Err(AuthError::AccountNotFound.into());
        }

        let token = self
            .tokens
            .issue_access_token(&account.id, Some(&account.phone_number))?;

        tracing::info!(
            phone = %mask_phone_number(&phone),
            user_id = %account.id,
            is_new_user,
            event = "login_succeeded",
            "Session opened"
        );

        Ok(AuthSession::new(
            account.id,
            account.phone_number,
            is_new_user,
            token,
        ))
    }

    /// Report timing details of a token without requiring it to be unexpired
    pub fn token_info(&self, token: &str) -> DomainResult<TokenInfo> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "token".to_string(),
            }
            .into());
        }
        Ok(self.tokens.inspect(token)?)
    }

    /// Load the account behind an authenticated session
    pub async fn current_account(&self, identity: &SessionIdentity) -> DomainResult<Account> {
        match self.directory.find_by_id(&identity.subject).await? {
            Some(account) if account.is_active => Ok(account),
            _ => Err(AuthError::AccountNotFound.into()),
        }
    }
}

fn validated_phone(phone: &str) -> DomainResult<String> {
    let normalized = normalize_phone_number(phone.trim());
    if normalized.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "phone_number".to_string(),
        }
        .into());
    }
    if !is_valid_e164(&normalized) {
        return Err(ValidationError::InvalidPhoneFormat.into());
    }
    Ok(normalized)
}
