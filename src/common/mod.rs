// Common module - shared types and utilities across all modules

pub mod clock;
pub mod config;
pub mod error;
pub mod helpers;
pub mod state;
pub mod validation;

// Re-export commonly used types for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{AppConfig, MAX_BODY_BYTES};
pub use error::{extract_json, ApiError};
pub use helpers::safe_email_log;
pub use state::AppState;
pub use validation::{ValidationErrors, Validator};
