use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::ErrorResponse;

/// Fallback handler for routes that match nothing, keeping 404s in the same
/// `{data, message}` envelope as every other response.
pub async fn not_found() -> Response {
    let body = ErrorResponse {
        data: None,
        message: "The requested resource was not found".to_string(),
    };

    (StatusCode::NOT_FOUND, Json(body)).into_response()
}
