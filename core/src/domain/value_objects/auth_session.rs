//! Results handed back to callers of the authentication flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Token type reported alongside every access token
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

/// Seconds before expiry at which a client should ask for a new session
pub const REFRESH_THRESHOLD_SECONDS: i64 = 300;

/// Outcome of a successful issuance; never carries the code itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedOtp {
    /// Phone number the code was sent to
    pub subject: String,

    /// When the code stops being accepted
    pub expires_at: DateTime<Utc>,

    /// Seconds of validity granted
    pub expires_in: u64,

    /// Gateway message id
    pub message_id: String,
}

/// A freshly minted access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    /// Encoded JWT
    pub token: String,

    /// When the token expires
    pub expires_at: DateTime<Utc>,

    /// Lifetime in seconds
    pub expires_in: i64,
}

/// Session opened after a successful OTP verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user_id: String,
    pub phone_number: String,
    /// Whether the account was created by this login
    pub is_new_user: bool,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl AuthSession {
    /// Creates a bearer session from an issued token
    pub fn new(
        user_id: impl Into<String>,
        phone_number: impl Into<String>,
        is_new_user: bool,
        token: IssuedToken,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            phone_number: phone_number.into(),
            is_new_user,
            access_token: token.token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: token.expires_in,
        }
    }
}

/// Timing details of a token, as reported to clients deciding whether to re-login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub user_id: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// Seconds left, zero once expired
    pub expires_in: i64,
    pub is_expired: bool,
    /// Expired, or less than five minutes left
    pub needs_refresh: bool,
}

impl TokenInfo {
    /// Derives timing details relative to `now`
    pub fn at(
        user_id: impl Into<String>,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        let remaining = (expires_at - now).num_seconds();
        let is_expired = remaining <= 0;

        Self {
            user_id: user_id.into(),
            issued_at,
            expires_at,
            expires_in: remaining.max(0),
            is_expired,
            needs_refresh: is_expired || remaining < REFRESH_THRESHOLD_SECONDS,
        }
    }
}
