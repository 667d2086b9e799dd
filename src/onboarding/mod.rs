//! # Onboarding Module
//!
//! Client onboarding form validation:
//! - Per-field checks and the whole-record validator
//! - Live single-field validation for form feedback
//! - The selectable service catalog

pub mod handlers;
pub mod models;
pub mod routes;
pub mod validators;


pub use routes::onboarding_routes;
