//! Token service module for session JWTs
//!
//! Handles access token generation, verification, and the expiry-tolerant
//! inspection used by clients deciding when to log in again.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
