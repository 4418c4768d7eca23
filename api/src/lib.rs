//! # FoodEasy API
//!
//! HTTP surface for phone OTP login and the session-gated account routes.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use app::create_app;
pub use state::AppState;
