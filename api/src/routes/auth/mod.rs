//! Authentication route handlers
//!
//! - Phone verification (sending and verifying codes)
//! - Token inspection
//! - Current account lookup

pub mod me;
pub mod send_otp;
pub mod token_info;
pub mod verify_otp;

pub use me::me;
pub use send_otp::send_otp;
pub use token_info::token_info;
pub use verify_otp::verify_otp;
