//! Session token configuration

use serde::{Deserialize, Serialize};

use super::{read, read_parsed, ConfigError, EnvLookup};

const DEFAULT_SECRET: &str = "your-secret-key-change-in-production";

/// Longest accepted session token lifetime (one year)
pub const MAX_ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 31_536_000;

/// JWT configuration for the session tokens handed out after OTP login
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,

    /// Algorithm for JWT signing (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            access_token_expiry: 2_592_000, // 30 days
            issuer: String::from("foodeasy"),
            audience: String::from("foodeasy-api"),
            algorithm: default_algorithm(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }

    pub(crate) fn from_lookup(lookup: EnvLookup<'_>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let access_token_expiry =
            read_parsed(lookup, "JWT_ACCESS_TOKEN_EXPIRY", defaults.access_token_expiry)?;
        if access_token_expiry <= 0 || access_token_expiry > MAX_ACCESS_TOKEN_EXPIRY_SECONDS {
            return Err(ConfigError::Invalid {
                name: "JWT_ACCESS_TOKEN_EXPIRY".to_string(),
                reason: format!(
                    "must be between 1 and {} seconds",
                    MAX_ACCESS_TOKEN_EXPIRY_SECONDS
                ),
            });
        }

        Ok(Self {
            secret: read(lookup, "JWT_SECRET").unwrap_or(defaults.secret),
            access_token_expiry,
            issuer: read(lookup, "JWT_ISSUER").unwrap_or(defaults.issuer),
            audience: read(lookup, "JWT_AUDIENCE").unwrap_or(defaults.audience),
            algorithm: read(lookup, "JWT_ALGORITHM").unwrap_or(defaults.algorithm),
        })
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}
