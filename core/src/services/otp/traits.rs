//! SMS gateway boundary used by the OTP issuer

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::DependencyError;

/// Body of an outbound message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SmsContent {
    /// Literal message text
    PlainText(String),
    /// Provider-side template rendered with the given variables
    Template {
        id: String,
        variables: serde_json::Value,
    },
}

/// A single message handed to the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundSms {
    /// Recipient (E.164)
    pub to: String,
    /// Sender identity (E.164)
    pub from: String,
    pub content: SmsContent,
}

/// Trait for SMS gateway integration
///
/// One call sends exactly one message. Implementations do not retry; any
/// failure is reported as `DependencyError::SmsGateway`.
#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// Send a message, returning the provider's message id
    async fn send(&self, message: OutboundSms) -> Result<String, DependencyError>;
}
