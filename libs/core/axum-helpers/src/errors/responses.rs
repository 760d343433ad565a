//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "data": null,
        "message": "An unexpected error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "data": {
            "qty": [{
                "code": "range",
                "message": null,
                "params": {"min": 1.0, "max": 5.0, "value": 9}
            }]
        },
        "message": "Validation failed"
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid UUID",
    content_type = "application/json",
    example = json!({
        "data": null,
        "message": "Invalid UUID: invalid character"
    })
)]
pub struct BadRequestUuidResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "data": null,
        "message": "The requested resource was not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Forbidden - No verifiable identity on the request",
    content_type = "application/json",
    example = json!({
        "data": null,
        "message": "unauthorized"
    })
)]
pub struct UnauthorizedResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Conflict - The request cannot be applied to current state",
    content_type = "application/json",
    example = json!({
        "data": null,
        "message": "Insufficient quantity for product: Mechanical Keyboard"
    })
)]
pub struct ConflictResponse(pub ErrorResponse);
