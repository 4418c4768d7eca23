//! Mock SMS Gateway Implementation
//!
//! Records messages instead of sending them. Used for `SMS_PROVIDER=mock`
//! and in tests that need to read back the code that would have been sent.

use async_trait::async_trait;
use fe_core::errors::DependencyError;
use fe_core::services::otp::{OutboundSms, SmsContent, SmsGateway};
use fe_shared::phone::mask_phone_number;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{info, warn};
use uuid::Uuid;

/// Mock SMS gateway for development and testing
#[derive(Clone, Default)]
pub struct MockSmsGateway {
    sent: Arc<Mutex<Vec<OutboundSms>>>,
    simulate_failure: Arc<AtomicBool>,
    console_output: bool,
}

impl MockSmsGateway {
    /// Create a silent mock gateway
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock gateway that echoes each message to stdout
    pub fn with_console_output(console_output: bool) -> Self {
        Self {
            console_output,
            ..Self::default()
        }
    }

    fn sent(&self) -> MutexGuard<'_, Vec<OutboundSms>> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    /// Number of messages accepted so far
    pub fn message_count(&self) -> usize {
        self.sent().len()
    }

    /// All accepted messages, oldest first
    pub fn messages(&self) -> Vec<OutboundSms> {
        self.sent().clone()
    }

    pub fn clear(&self) {
        self.sent().clear();
    }

    /// The code carried by the most recent message to `phone`
    pub fn last_code_for(&self, phone: &str) -> Option<String> {
        let sent = self.sent();
        let message = sent.iter().rev().find(|m| m.to == phone)?;
        extract_code(&message.content)
    }
}

/// Pull the numeric code out of a message body or template variables
pub fn extract_code(content: &SmsContent) -> Option<String> {
    match content {
        SmsContent::Template { variables, .. } => variables
            .get("OTP")
            .and_then(|v| v.as_str())
            .map(str::to_string),
        SmsContent::PlainText(body) => body
            .split(|c: char| !c.is_ascii_digit())
            .find(|part| part.len() >= 4)
            .map(str::to_string),
    }
}

#[async_trait]
impl SmsGateway for MockSmsGateway {
    async fn send(&self, message: OutboundSms) -> Result<String, DependencyError> {
        let masked_phone = mask_phone_number(&message.to);

        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(
                provider = "mock",
                phone = %masked_phone,
                "Mock SMS gateway simulating failure"
            );
            return Err(DependencyError::SmsGateway {
                message: "Simulated SMS sending failure".to_string(),
            });
        }

        let message_id = format!("mock_{}", Uuid::new_v4());

        if self.console_output {
            let body = match &message.content {
                SmsContent::PlainText(body) => body.clone(),
                SmsContent::Template { id, variables } => format!("[{}] {}", id, variables),
            };
            println!("\n{}", "=".repeat(60));
            println!("MOCK SMS to {} from {}", message.to, message.from);
            println!("Message ID: {}", message_id);
            println!("Content: {}", body);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            provider = "mock",
            phone = %masked_phone,
            message_id = %message_id,
            "SMS accepted (mock)"
        );

        self.sent().push(message);
        Ok(message_id)
    }
}
