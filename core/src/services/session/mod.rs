//! Session token gate
//!
//! Evaluates the Authorization header of a request in a fixed order
//! (header, shape, signature, expiry, account) and performs the owner check
//! for per-user resources.

mod gate;
mod types;


pub use gate::{extract_bearer_token, verify_owner, SessionGate};
pub use types::GateState;
