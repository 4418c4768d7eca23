//! # Infrastructure Layer
//!
//! Concrete implementations of the boundaries declared in `fe_core`:
//!
//! - **SMS**: Twilio Messages API gateway and a log-only mock gateway
//! - **Directory**: Supabase (PostgREST) account directory
//!
//! Both are selected from environment-driven settings through
//! [`sms::create_sms_gateway`] and [`directory::create_account_directory`].

// Re-export core types for convenience
pub use fe_core::errors::*;

/// SMS gateway module - External SMS providers
pub mod sms;

/// Account directory module - External user store clients
pub mod directory;

pub use directory::{create_account_directory, SupabaseAccountDirectory, SupabaseConfig};
pub use sms::{create_sms_gateway, MockSmsGateway, TwilioConfig, TwilioSmsGateway};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Unexpected status from an external service
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not have the expected shape
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl InfrastructureError {
    /// Report this failure as an SMS gateway dependency error
    pub fn into_sms_error(self) -> DependencyError {
        DependencyError::SmsGateway {
            message: self.to_string(),
        }
    }

    /// Report this failure as an account directory dependency error
    pub fn into_directory_error(self) -> DomainError {
        DomainError::Dependency(DependencyError::AccountDirectory {
            message: self.to_string(),
        })
    }
}

/// Build an HTTP client with the given request timeout
pub(crate) fn http_client(timeout_secs: u64) -> Result<reqwest::Client, InfrastructureError> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()
        .map_err(InfrastructureError::from)
}
