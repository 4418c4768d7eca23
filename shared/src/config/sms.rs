//! SMS gateway configuration

use serde::{Deserialize, Serialize};

use super::{read, read_parsed, ConfigError, EnvLookup};

/// SMS provider selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SmsProvider {
    /// Twilio Messages API
    Twilio,
    /// Log-only gateway for development and tests
    Mock,
}

impl std::str::FromStr for SmsProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "twilio" => Ok(SmsProvider::Twilio),
            "mock" => Ok(SmsProvider::Mock),
            other => Err(format!("unknown SMS provider '{}'", other)),
        }
    }
}

/// SMS service configuration
///
/// Credentials and the sender identity are optional here; their absence is
/// reported when the gateway is built (credentials) or when the first code is
/// issued (sender identity).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// SMS service provider
    pub provider: SmsProvider,
    /// Twilio Account SID
    pub account_sid: Option<String>,
    /// Twilio Auth Token
    pub auth_token: Option<String>,
    /// Sender phone number (E.164)
    pub from_number: Option<String>,
    /// Content template SID; when set, codes are sent through the template
    pub content_sid: Option<String>,
    /// Base URL of the Twilio REST API
    pub api_base_url: String,
    /// Timeout for gateway requests in seconds
    pub request_timeout_secs: u64,
    /// Echo mock messages, codes included, to stdout for local development
    pub mock_echo: bool,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: SmsProvider::Mock,
            account_sid: None,
            auth_token: None,
            from_number: None,
            content_sid: None,
            api_base_url: String::from("https://api.twilio.com"),
            request_timeout_secs: 30,
            mock_echo: false,
        }
    }
}

impl SmsConfig {
    /// Whether the template delivery path is configured
    pub fn uses_template(&self) -> bool {
        self.content_sid.is_some()
    }

    pub(crate) fn from_lookup(lookup: EnvLookup<'_>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let provider = match read(lookup, "SMS_PROVIDER") {
            Some(raw) => raw.parse().map_err(|reason| ConfigError::Invalid {
                name: "SMS_PROVIDER".to_string(),
                reason,
            })?,
            None => defaults.provider,
        };

        Ok(Self {
            provider,
            account_sid: read(lookup, "TWILIO_ACCOUNT_SID"),
            auth_token: read(lookup, "TWILIO_AUTH_TOKEN"),
            from_number: read(lookup, "TWILIO_PHONE_NUMBER"),
            content_sid: read(lookup, "TWILIO_OTP_CONTENT_SID"),
            api_base_url: read(lookup, "TWILIO_API_BASE_URL").unwrap_or(defaults.api_base_url),
            request_timeout_secs: read_parsed(
                lookup,
                "TWILIO_REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            )?,
            mock_echo: read_parsed(lookup, "SMS_MOCK_ECHO", defaults.mock_echo)?,
        })
    }
}
