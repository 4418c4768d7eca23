//! Value objects returned by the authentication services.

pub mod auth_session;

pub use auth_session::{AuthSession, IssuedOtp, IssuedToken, TokenInfo};
