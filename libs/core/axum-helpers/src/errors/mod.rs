pub mod handlers;
pub mod responses;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// Errors reuse the same envelope as successful responses so clients can
/// always read `data` and `message` without branching on the status code.
/// `data` is serialized even when it is `null`; for validation failures it
/// carries the per-field error details.
///
/// # JSON Example
///
/// ```json
/// {
///   "data": null,
///   "message": "unauthorized"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error details, or `null` when there are none
    pub data: Option<serde_json::Value>,
    /// Human-readable error message
    pub message: String,
}

/// Application error type that can be converted to HTTP responses.
///
/// This enum integrates with common error types from dependencies and keeps
/// the status mapping in one place: domain errors convert into these
/// variants and inherit the envelope shape.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON parsing error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation failed")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid UUID: {0}")]
    UuidError(#[from] uuid::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request carried no verifiable identity. Maps to 403 with the
    /// fixed `{"data": null, "message": "unauthorized"}` body.
    #[error("unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Operation timed out: {0}")]
    Timeout(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

/// Flattens `ValidationErrors` into `{ field: [{code, message, params}] }`
/// so clients can highlight individual form fields.
fn validation_details(errors: &ValidationErrors) -> serde_json::Value {
    let mut details = serde_json::Map::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<serde_json::Value> = field_errors
            .iter()
            .map(|error| {
                json!({
                    "code": error.code,
                    "message": error.message,
                    "params": error.params,
                })
            })
            .collect();
        details.insert(field.to_string(), serde_json::Value::Array(messages));
    }
    serde_json::Value::Object(details)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, data) = match self {
            AppError::JsonExtractorRejection(ref e) => {
                tracing::info!("JSON extraction failed: {}", e.body_text());
                (e.status(), e.body_text(), None)
            }
            AppError::ValidationError(ref e) => {
                tracing::info!("Validation failed: {e}");
                (
                    StatusCode::BAD_REQUEST,
                    "Validation failed".to_string(),
                    Some(validation_details(e)),
                )
            }
            AppError::UuidError(ref e) => {
                tracing::info!("Invalid UUID: {e}");
                (StatusCode::BAD_REQUEST, format!("Invalid UUID: {e}"), None)
            }
            AppError::BadRequest(message) => {
                tracing::info!("Bad request: {message}");
                (StatusCode::BAD_REQUEST, message, None)
            }
            AppError::Unauthorized => {
                tracing::warn!("Request rejected: no verifiable identity");
                (StatusCode::FORBIDDEN, "unauthorized".to_string(), None)
            }
            AppError::NotFound(message) => {
                tracing::info!("Not found: {message}");
                (StatusCode::NOT_FOUND, message, None)
            }
            AppError::Conflict(message) => {
                tracing::warn!("Conflict: {message}");
                (StatusCode::CONFLICT, message, None)
            }
            AppError::Database(ref e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                    None,
                )
            }
            AppError::Timeout(ref e) => {
                tracing::error!("Store operation timed out: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                    None,
                )
            }
            AppError::InternalServerError(ref e) => {
                tracing::error!("Internal server error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse { data, message });
        (status, body).into_response()
    }
}
