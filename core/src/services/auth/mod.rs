//! Authentication service module
//!
//! Orchestrates the public login flow: send a code, verify it, find or create
//! the account, and hand back a bearer session.

mod service;


pub use service::AuthService;
