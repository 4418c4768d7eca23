//! Business services containing domain logic and use cases.

pub mod auth;
pub mod otp;
pub mod session;
pub mod token;

// Re-export commonly used types
pub use auth::AuthService;
pub use otp::{
    CredentialStore, OtpIssuer, OtpOutcome, OtpServiceConfig, OtpSweeper, OtpVerifier,
    OutboundSms, SmsContent, SmsGateway,
};
pub use session::{verify_owner, GateState, SessionGate};
pub use token::{TokenService, TokenServiceConfig};
