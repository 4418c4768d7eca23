//! Configuration for the token service

use fe_shared::JwtConfig;
use jsonwebtoken::Algorithm;

use crate::domain::entities::token::{JWT_AUDIENCE, JWT_ISSUER};
use crate::errors::ConfigurationError;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm (HMAC family)
    pub algorithm: Algorithm,
    /// Access token lifetime in seconds
    pub access_token_expiry_seconds: i64,
    /// Expected and issued `iss` claim
    pub issuer: String,
    /// Expected and issued `aud` claim
    pub audience: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        let jwt = JwtConfig::default();
        Self {
            jwt_secret: jwt.secret,
            algorithm: Algorithm::HS256,
            access_token_expiry_seconds: jwt.access_token_expiry,
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
        }
    }
}

impl TokenServiceConfig {
    /// Build from environment-loaded JWT settings
    pub fn from_jwt_config(jwt: &JwtConfig) -> Result<Self, ConfigurationError> {
        let algorithm = match jwt.algorithm.to_uppercase().as_str() {
            "HS256" => Algorithm::HS256,
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            other => {
                return Err(ConfigurationError::InvalidSetting {
                    name: "JWT_ALGORITHM".to_string(),
                    reason: format!("unsupported algorithm '{}', expected HS256, HS384 or HS512", other),
                })
            }
        };

        if jwt.secret.is_empty() {
            return Err(ConfigurationError::MissingCredentials {
                name: "JWT_SECRET".to_string(),
            });
        }

        Ok(Self {
            jwt_secret: jwt.secret.clone(),
            algorithm,
            access_token_expiry_seconds: jwt.access_token_expiry,
            issuer: jwt.issuer.clone(),
            audience: jwt.audience.clone(),
        })
    }
}
