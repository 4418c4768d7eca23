pub mod error;
pub mod validation;

pub use error::{json_error_handler, not_found, status_for, ApiError};
pub use validation::validate_request;
