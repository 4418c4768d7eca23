//! Configuration for OTP issuance

use fe_shared::{OtpConfig, SmsConfig};

use crate::domain::entities::otp_record::{DEFAULT_CODE_LENGTH, DEFAULT_TTL_SECONDS};
use crate::errors::ConfigurationError;

/// Required prefix of a content template id
pub const TEMPLATE_ID_PREFIX: &str = "HX";

/// Total length of a content template id
pub const TEMPLATE_ID_LENGTH: usize = 34;

/// Settings used by the issuer on every call
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Number of digits per code
    pub code_length: usize,
    /// Seconds a code stays valid
    pub ttl_seconds: u64,
    /// Sender identity; issuance fails while unset
    pub sender: Option<String>,
    /// Content template id; plain text is sent while unset
    pub template_id: Option<String>,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            ttl_seconds: DEFAULT_TTL_SECONDS,
            sender: None,
            template_id: None,
        }
    }
}

/// Resolved delivery settings for one issuance
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Delivery<'a> {
    pub sender: &'a str,
    pub template_id: Option<&'a str>,
}

impl OtpServiceConfig {
    /// Combine OTP and SMS settings loaded from the environment
    pub fn from_settings(otp: &OtpConfig, sms: &SmsConfig) -> Self {
        Self {
            code_length: otp.code_length,
            ttl_seconds: otp.ttl_seconds,
            sender: sms.from_number.clone(),
            template_id: sms.content_sid.clone(),
        }
    }

    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    pub fn with_template_id(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }

    /// Whole minutes of validity shown in messages
    pub fn validity_minutes(&self) -> u64 {
        self.ttl_seconds / 60
    }

    pub(crate) fn delivery(&self) -> Result<Delivery<'_>, ConfigurationError> {
        let sender = self
            .sender
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigurationError::MissingSender)?;

        let template_id = match self.template_id.as_deref() {
            Some(id) => {
                if !id.starts_with(TEMPLATE_ID_PREFIX) || id.len() != TEMPLATE_ID_LENGTH {
                    return Err(ConfigurationError::InvalidTemplateId { length: id.len() });
                }
                Some(id)
            }
            None => None,
        };

        Ok(Delivery {
            sender,
            template_id,
        })
    }
}
