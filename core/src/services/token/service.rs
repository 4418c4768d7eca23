//! Main token service implementation

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::domain::value_objects::{IssuedToken, TokenInfo};
use crate::errors::TokenError;

use super::config::TokenServiceConfig;

/// Mints and verifies signed session tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Access token lifetime in seconds
    pub fn access_token_lifetime(&self) -> i64 {
        self.config.access_token_expiry_seconds
    }

    /// Generates an access token for an account
    ///
    /// # Arguments
    ///
    /// * `subject` - Account id placed in `sub`
    /// * `phone_number` - Optional phone number claim
    pub fn issue_access_token(
        &self,
        subject: &str,
        phone_number: Option<&str>,
    ) -> Result<IssuedToken, TokenError> {
        self.issue_access_token_at(subject, phone_number, Utc::now())
    }

    /// Generates an access token as if issued at `issued_at`
    pub fn issue_access_token_at(
        &self,
        subject: &str,
        phone_number: Option<&str>,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedToken, TokenError> {
        let lifetime = self.config.access_token_expiry_seconds;
        let claims = Claims::new_access_token(
            subject,
            phone_number.map(str::to_string),
            issued_at,
            lifetime,
            &self.config.issuer,
            &self.config.audience,
        );

        let token = encode(&Header::new(self.config.algorithm), &claims, &self.encoding_key)
            .map_err(|e| {
                tracing::error!(error = %e, event = "token_encode_failed", "Failed to sign access token");
                TokenError::TokenGenerationFailed
            })?;

        Ok(IssuedToken {
            token,
            expires_at: DateTime::from_timestamp(claims.exp, 0).unwrap_or(DateTime::<Utc>::MAX_UTC),
            expires_in: lifetime,
        })
    }

    /// Verifies an access token
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError::TokenExpired)` - Signature checks out but the token expired
    /// * `Err(TokenError)` - Bad signature, wrong issuer/audience, or not a JWT
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(map_jwt_error)
    }

    /// Decodes a signed token without enforcing expiry, reporting its timing
    pub fn inspect(&self, token: &str) -> Result<TokenInfo, TokenError> {
        let mut validation = self.validation.clone();
        validation.validate_exp = false;

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(map_jwt_error)?;

        Ok(TokenInfo::at(
            claims.sub.clone(),
            claims.issued_at(),
            claims.expires_at(),
            Utc::now(),
        ))
    }
}

fn map_jwt_error(e: jsonwebtoken::errors::Error) -> TokenError {
    match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::TokenExpired,
        ErrorKind::ImmatureSignature => TokenError::TokenNotYetValid,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::InvalidTokenFormat,
    }
}
