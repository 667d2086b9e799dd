use super::models::{
    fields, HealthResponse, Service, ServicesResponse, ValidateFieldResponse,
    ValidateRecordResponse,
};
use super::validators::FieldError;
use crate::common::{
    extract_json, safe_email_log, ApiError, AppState, ValidationErrors, Validator,
};
use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

// ============================================================================
// Onboarding Validation Handlers
// ============================================================================

/// POST /api/onboarding/validate - Validate a full onboarding submission
pub async fn validate_record(
    Extension(state): Extension<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let payload = extract_json(body)?;
    match state.validator.validate(&payload) {
        Ok(record) => {
            info!(
                email = %safe_email_log(&record.email),
                services = record.services.len(),
                start_date = %record.project_start_date,
                "Onboarding submission accepted"
            );
            Ok(Json(ValidateRecordResponse {
                valid: true,
                record,
            }))
        }
        Err(errors) => {
            let rejected: Vec<&str> = errors.fields().collect();
            info!(
                error_count = errors.len(),
                fields = ?rejected,
                "Onboarding submission rejected"
            );
            Err(ApiError::Validation(errors))
        }
    }
}

/// POST /api/onboarding/validate/:field - Validate one field as it changes
///
/// The body is the raw field value on its own, e.g. `"ada@example.com"` or
/// `["UI/UX"]`.
pub async fn validate_field(
    Extension(state): Extension<Arc<AppState>>,
    Path(field): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let value = extract_json(body)?;
    match state.validator.validate_field(&field, Some(&value)) {
        Ok(normalized) => Ok(Json(ValidateFieldResponse {
            field,
            valid: true,
            value: normalized,
        })),
        Err(FieldError::Invalid(message)) => {
            debug!(field = %field, message = %message, "Field rejected");
            let mut errors = ValidationErrors::new();
            errors.add_error(&field, &message);
            Err(ApiError::Validation(errors))
        }
        Err(FieldError::UnknownField(name)) => Err(ApiError::NotFound(format!(
            "Unknown field '{}'; expected one of {}",
            name,
            fields::ALL.join(", ")
        ))),
    }
}

/// GET /api/onboarding/services - List selectable services
pub async fn list_services() -> impl IntoResponse {
    Json(ServicesResponse {
        services: Service::ALL.to_vec(),
    })
}

/// GET /api/health - Liveness plus the date start-date checks compare against
pub async fn health(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        today: state.clock.today(),
    })
}
