//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Session token (JWT) configuration
//! - `directory` - Account directory backend (Supabase or in-memory)
//! - `environment` - Environment detection and logging configuration
//! - `otp` - One-time code length, lifetime and sweeping
//! - `server` - HTTP server bind address
//! - `sms` - SMS gateway provider and sender identity
//!
//! Every sub-configuration is read through an [`EnvLookup`] so the same
//! parsing code serves the process environment and tests.

pub mod auth;
pub mod directory;
pub mod environment;
pub mod otp;
pub mod server;
pub mod sms;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

// Re-export commonly used types
pub use auth::JwtConfig;
pub use directory::{DirectoryBackend, DirectoryConfig};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use otp::OtpConfig;
pub use server::ServerConfig;
pub use sms::{SmsConfig, SmsProvider};

/// Source of configuration values, keyed by environment variable name
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Errors raised while loading configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Required setting {name} is not set")]
    Missing { name: String },

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: String, reason: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Session token configuration
    pub jwt: JwtConfig,

    /// One-time code configuration
    pub otp: OtpConfig,

    /// SMS gateway configuration
    pub sms: SmsConfig,

    /// Account directory configuration
    pub directory: DirectoryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Result<Self, ConfigError> {
        let environment = Environment::from_lookup(lookup);

        Ok(Self {
            environment,
            server: ServerConfig::from_lookup(lookup)?,
            jwt: JwtConfig::from_lookup(lookup)?,
            otp: OtpConfig::from_lookup(lookup)?,
            sms: SmsConfig::from_lookup(lookup)?,
            directory: DirectoryConfig::from_lookup(lookup)?,
            logging: LoggingConfig::from_lookup(lookup, environment),
        })
    }
}

/// Read a trimmed, non-empty value
pub(crate) fn read(lookup: EnvLookup<'_>, name: &str) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Read and parse a value, falling back to `default` when unset
pub(crate) fn read_parsed<T>(lookup: EnvLookup<'_>, name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match read(lookup, name) {
        Some(raw) => raw.parse::<T>().map_err(|e| ConfigError::Invalid {
            name: name.to_string(),
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
