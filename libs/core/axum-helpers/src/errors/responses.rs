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
        "code": 1006,
        "error": "INTERNAL_ERROR",
        "message": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - missing or malformed JSON body",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "INVALID_JSON",
        "message": "Invalid JSON format",
        "details": {
            "reason": "Failed to parse the request body as JSON: expected value at line 1 column 1"
        }
    })
)]
pub struct BadRequestJsonResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "error": "NOT_FOUND",
        "message": "Item 42 not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
