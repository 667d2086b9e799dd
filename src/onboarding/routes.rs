use super::handlers;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates the onboarding router with all validation routes
pub fn onboarding_routes() -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/onboarding/services", get(handlers::list_services))
        .route("/api/onboarding/validate", post(handlers::validate_record))
        .route(
            "/api/onboarding/validate/:field",
            post(handlers::validate_field),
        )
}
