//! Token entities for JWT-based session authentication.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default JWT issuer
pub const JWT_ISSUER: &str = "foodeasy";

/// Default JWT audience
pub const JWT_AUDIENCE: &str = "foodeasy-api";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account id)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,

    /// Phone number the session was opened with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl Claims {
    /// Creates access token claims issued at `now`
    pub fn new_access_token(
        subject: impl Into<String>,
        phone_number: Option<String>,
        now: DateTime<Utc>,
        lifetime_seconds: i64,
        issuer: &str,
        audience: &str,
    ) -> Self {
        let expiry = Duration::try_seconds(lifetime_seconds)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().to_string(),
            phone_number,
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Seconds until expiry, negative once expired
    pub fn seconds_remaining(&self) -> i64 {
        self.exp - Utc::now().timestamp()
    }

    /// Issued-at as a timestamp
    pub fn issued_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.iat, 0).single().unwrap_or_default()
    }

    /// Expiry as a timestamp
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0).single().unwrap_or_default()
    }
}

/// Authenticated caller, produced by the session gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    /// Account id the token was minted for
    pub subject: String,

    /// Phone number of the resolved account
    pub phone_number: String,

    /// When the token was issued
    pub issued_at: DateTime<Utc>,

    /// When the token expires
    pub expires_at: DateTime<Utc>,

    /// Token id
    pub token_id: String,
}

impl SessionIdentity {
    /// Builds the identity from verified claims and the account's phone number
    pub fn from_claims(claims: &Claims, phone_number: impl Into<String>) -> Self {
        Self {
            subject: claims.sub.clone(),
            phone_number: phone_number.into(),
            issued_at: claims.issued_at(),
            expires_at: claims.expires_at(),
            token_id: claims.jti.clone(),
        }
    }
}
