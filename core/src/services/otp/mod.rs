//! Phone OTP lifecycle
//!
//! - `store` - credential store, one live code per phone number
//! - `issuer` - code generation and SMS delivery
//! - `verifier` - single-use, constant-time code checks
//! - `sweeper` - optional background purge of expired codes

mod config;
mod issuer;
mod store;
mod sweeper;
mod traits;
mod types;
mod verifier;

#[cfg(test)]
pub(crate) mod tests;

pub use config::{OtpServiceConfig, TEMPLATE_ID_LENGTH, TEMPLATE_ID_PREFIX};
pub use issuer::{generate_code, OtpIssuer};
pub use store::CredentialStore;
pub use sweeper::OtpSweeper;
pub use traits::{OutboundSms, SmsContent, SmsGateway};
pub use types::OtpOutcome;
pub use verifier::OtpVerifier;
