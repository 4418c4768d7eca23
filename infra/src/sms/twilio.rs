//! Twilio SMS Gateway Implementation
//!
//! Sends messages through the Twilio Messages REST API. Codes go out either as
//! a plain-text body or through a Content template (`ContentSid` plus
//! `ContentVariables`) when one is configured.
//!
//! Exactly one request is made per message. Failures are reported to the
//! caller and never retried here.

use async_trait::async_trait;
use fe_core::errors::{ConfigurationError, DependencyError};
use fe_core::services::otp::{OutboundSms, SmsContent, SmsGateway};
use fe_shared::phone::mask_phone_number;
use fe_shared::SmsConfig;
use phonenumber::{Mode, PhoneNumber};
use serde::Deserialize;
use tracing::{debug, error, info};

use crate::{http_client, InfrastructureError};

/// Twilio gateway configuration
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// Base URL of the REST API, without trailing slash
    pub api_base_url: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl TwilioConfig {
    /// Take credentials from the loaded SMS settings
    ///
    /// The sender number and template id are not needed here; they travel
    /// with each [`OutboundSms`].
    pub fn from_settings(settings: &SmsConfig) -> Result<Self, ConfigurationError> {
        let account_sid = required(settings.account_sid.as_deref(), "TWILIO_ACCOUNT_SID")?;
        let auth_token = required(settings.auth_token.as_deref(), "TWILIO_AUTH_TOKEN")?;

        Ok(Self {
            account_sid,
            auth_token,
            api_base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            request_timeout_secs: settings.request_timeout_secs,
        })
    }

    /// Endpoint that creates a message for this account
    pub fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_base_url, self.account_sid
        )
    }
}

fn required(value: Option<&str>, name: &str) -> Result<String, ConfigurationError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ConfigurationError::MissingCredentials {
            name: name.to_string(),
        }),
    }
}

/// Subset of the message resource returned by Twilio
#[derive(Debug, Deserialize)]
struct MessageResource {
    sid: String,
}

/// Twilio SMS gateway
pub struct TwilioSmsGateway {
    client: reqwest::Client,
    config: TwilioConfig,
}

impl TwilioSmsGateway {
    /// Create a new Twilio gateway
    pub fn new(config: TwilioConfig) -> Result<Self, InfrastructureError> {
        let client = http_client(config.request_timeout_secs)?;

        info!(
            base_url = %config.api_base_url,
            timeout_secs = config.request_timeout_secs,
            "Twilio SMS gateway initialized"
        );

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &TwilioConfig {
        &self.config
    }

    /// Validate and normalize a phone number to E.164
    pub fn validate_phone_number(phone: &str) -> Result<String, DependencyError> {
        if !phone.starts_with('+') {
            return Err(DependencyError::SmsGateway {
                message: "Phone number must be in E.164 format (e.g., +15551234567)".to_string(),
            });
        }

        match phone.parse::<PhoneNumber>() {
            Ok(parsed) => {
                let formatted = parsed.format().mode(Mode::E164).to_string();
                debug!(phone = %mask_phone_number(&formatted), "Validated phone number");
                Ok(formatted)
            }
            Err(e) => Err(DependencyError::SmsGateway {
                message: format!("Invalid phone number format: {}", e),
            }),
        }
    }

    /// Form fields for a Messages API request
    pub fn form_fields(to: &str, message: &OutboundSms) -> Vec<(&'static str, String)> {
        let mut fields = vec![("To", to.to_string()), ("From", message.from.clone())];

        match &message.content {
            SmsContent::PlainText(body) => fields.push(("Body", body.clone())),
            SmsContent::Template { id, variables } => {
                fields.push(("ContentSid", id.clone()));
                fields.push(("ContentVariables", variables.to_string()));
            }
        }

        fields
    }

    async fn post_message(
        &self,
        fields: &[(&'static str, String)],
    ) -> Result<String, InfrastructureError> {
        let response = self
            .client
            .post(self.config.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(fields)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InfrastructureError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let resource = response
            .json::<MessageResource>()
            .await
            .map_err(|e| InfrastructureError::Decode(e.to_string()))?;

        Ok(resource.sid)
    }
}

#[async_trait]
impl SmsGateway for TwilioSmsGateway {
    async fn send(&self, message: OutboundSms) -> Result<String, DependencyError> {
        let to = Self::validate_phone_number(&message.to)?;
        let fields = Self::form_fields(&to, &message);

        match self.post_message(&fields).await {
            Ok(sid) => {
                info!(
                    phone = %mask_phone_number(&to),
                    sid = %sid,
                    "SMS sent via Twilio"
                );
                Ok(sid)
            }
            Err(e) => {
                error!(
                    phone = %mask_phone_number(&to),
                    error = %e,
                    "Twilio rejected or failed the SMS request"
                );
                Err(e.into_sms_error())
            }
        }
    }
}
