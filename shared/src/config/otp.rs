//! One-time code configuration

use serde::{Deserialize, Serialize};

use super::{read_parsed, ConfigError, EnvLookup};

/// Longest accepted code lifetime (one day)
pub const MAX_OTP_TTL_SECONDS: u64 = 86_400;

/// Settings for OTP issuance and expiry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Number of digits in each code
    pub code_length: usize,

    /// Seconds a code stays valid after issuance
    pub ttl_seconds: u64,

    /// Seconds between background sweeps of expired codes (0 = disabled)
    pub sweep_interval_seconds: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            code_length: 6,
            ttl_seconds: 600,
            sweep_interval_seconds: 300,
        }
    }
}

impl OtpConfig {
    /// Whole minutes of validity, as shown to the user
    pub fn validity_minutes(&self) -> u64 {
        self.ttl_seconds / 60
    }

    pub(crate) fn from_lookup(lookup: EnvLookup<'_>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            code_length: read_parsed(lookup, "OTP_CODE_LENGTH", defaults.code_length)?,
            ttl_seconds: read_parsed(lookup, "OTP_TTL_SECONDS", defaults.ttl_seconds)?,
            sweep_interval_seconds: read_parsed(
                lookup,
                "OTP_SWEEP_INTERVAL_SECONDS",
                defaults.sweep_interval_seconds,
            )?,
        };

        if !(4..=10).contains(&config.code_length) {
            return Err(ConfigError::Invalid {
                name: "OTP_CODE_LENGTH".to_string(),
                reason: "must be between 4 and 10 digits".to_string(),
            });
        }
        if config.ttl_seconds == 0 || config.ttl_seconds > MAX_OTP_TTL_SECONDS {
            return Err(ConfigError::Invalid {
                name: "OTP_TTL_SECONDS".to_string(),
                reason: format!("must be between 1 and {} seconds", MAX_OTP_TTL_SECONDS),
            });
        }

        Ok(config)
    }
}
