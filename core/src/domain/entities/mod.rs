//! Domain entities representing core business objects.

pub mod account;
pub mod otp_record;
pub mod token;

// Re-export commonly used types
pub use account::Account;
pub use otp_record::{OtpRecord, DEFAULT_CODE_LENGTH, DEFAULT_TTL_SECONDS};
pub use token::{Claims, SessionIdentity, JWT_AUDIENCE, JWT_ISSUER};
