//! Shared utilities and common types for the FoodEasy server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Error response structures and stable error codes
//! - Phone number utilities (normalisation, E.164 validation, masking)
//! - API response envelopes

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, DirectoryBackend, DirectoryConfig, Environment, JwtConfig,
    LogFormat, LoggingConfig, OtpConfig, ServerConfig, SmsConfig, SmsProvider,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{ApiResponse, HealthResponse, HealthStatus};
pub use utils::phone;
