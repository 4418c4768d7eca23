//! # FoodEasy Core
//!
//! Domain layer for the FoodEasy authentication backend: phone OTP issuance
//! and verification, session tokens, the bearer gate in front of protected
//! routes, and the account directory boundary.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
