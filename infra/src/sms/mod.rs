//! SMS Gateway Module
//!
//! Implementations of [`fe_core::services::otp::SmsGateway`]:
//!
//! - **Twilio**: production delivery via the Messages REST API
//! - **Mock**: records messages, optionally echoing them for local development

use std::sync::Arc;

use fe_core::errors::ConfigurationError;
use fe_core::services::otp::SmsGateway;
use fe_shared::{SmsConfig, SmsProvider};

pub mod mock;
pub mod twilio;

pub use mock::MockSmsGateway;
pub use twilio::{TwilioConfig, TwilioSmsGateway};

#[cfg(test)]
mod tests;

/// Create an SMS gateway based on configuration
///
/// Missing Twilio credentials are reported here. The sender identity and
/// template id are checked per issuance by the OTP issuer.
pub fn create_sms_gateway(config: &SmsConfig) -> Result<Arc<dyn SmsGateway>, ConfigurationError> {
    match config.provider {
        SmsProvider::Mock => {
            tracing::info!(provider = "mock", "Using mock SMS gateway");
            Ok(Arc::new(MockSmsGateway::with_console_output(config.mock_echo)))
        }
        SmsProvider::Twilio => {
            let twilio_config = TwilioConfig::from_settings(config)?;
            let gateway = TwilioSmsGateway::new(twilio_config).map_err(|e| {
                ConfigurationError::InvalidSetting {
                    name: "TWILIO_REQUEST_TIMEOUT_SECS".to_string(),
                    reason: e.to_string(),
                }
            })?;
            Ok(Arc::new(gateway))
        }
    }
}
