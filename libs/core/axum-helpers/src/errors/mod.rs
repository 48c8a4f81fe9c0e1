pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Returned for all error responses:
/// - `code`: Integer error code for logging/monitoring (e.g., 1004)
/// - `error`: Machine-readable error identifier (e.g., "NOT_FOUND")
/// - `message`: Human-readable error message
/// - `details`: Optional additional error details
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Item 42 not found"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details, code) = match self {
            AppError::Io(e) => {
                tracing::error!(error_code = ErrorCode::IoError.code(), "I/O error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::IoError.default_message().to_string(),
                    None,
                    ErrorCode::IoError,
                )
            }
            AppError::JsonExtractorRejection(e) => map_json_rejection(&e),
            AppError::NotFound(msg) => {
                tracing::info!(
                    error_code = ErrorCode::NotFound.code(),
                    "Not found: {}",
                    msg
                );
                (StatusCode::NOT_FOUND, msg, None, ErrorCode::NotFound)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    msg,
                    None,
                    ErrorCode::InternalError,
                )
            }
        };

        error_response_with_details(status, message, details, code)
    }
}

/// Maps a JSON body rejection onto a 400 response.
///
/// Missing content type, unparsable JSON and shape mismatches are all
/// client mistakes; only body-read failures (e.g. payload too large) keep
/// the status axum chose.
fn map_json_rejection(
    rejection: &JsonRejection,
) -> (StatusCode, String, Option<serde_json::Value>, ErrorCode) {
    tracing::warn!(
        error_code = ErrorCode::JsonExtraction.code(),
        "JSON extraction error: {:?}",
        rejection
    );

    match rejection {
        JsonRejection::JsonSyntaxError(_) => (
            StatusCode::BAD_REQUEST,
            ErrorCode::InvalidJson.default_message().to_string(),
            Some(serde_json::json!({ "reason": rejection.body_text() })),
            ErrorCode::InvalidJson,
        ),
        JsonRejection::BytesRejection(_) => (
            rejection.status(),
            rejection.body_text(),
            None,
            ErrorCode::JsonExtraction,
        ),
        _ => (
            StatusCode::BAD_REQUEST,
            ErrorCode::JsonExtraction.default_message().to_string(),
            Some(serde_json::json!({ "reason": rejection.body_text() })),
            ErrorCode::JsonExtraction,
        ),
    }
}

/// Helper function to create error responses.
///
/// # Example
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorCode};
/// use axum::http::StatusCode;
///
/// let response = error_response(
///     StatusCode::NOT_FOUND,
///     "Item 7 not found".to_string(),
///     ErrorCode::NotFound,
/// );
/// ```
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    error_response_with_details(status, message, None, error_code)
}

fn error_response_with_details(
    status: StatusCode,
    message: String,
    details: Option<serde_json::Value>,
    error_code: ErrorCode,
) -> Response {
    let body = Json(ErrorResponse {
        code: error_code.code(),
        error: error_code.as_str().to_string(),
        message,
        details,
    });

    (status, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_renders_404_with_code() {
        let response = AppError::NotFound("Item 3 not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_of(response).await;
        assert_eq!(body.code, 1004);
        assert_eq!(body.error, "NOT_FOUND");
        assert_eq!(body.message, "Item 3 not found");
        assert!(body.details.is_none());
    }

    #[tokio::test]
    async fn test_io_error_hides_details() {
        let err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port 8090 taken");
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert_eq!(body.error, "IO_ERROR");
        assert_eq!(body.message, "I/O error occurred");
    }

    #[tokio::test]
    async fn test_internal_error_renders_500() {
        let response = AppError::InternalServerError("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await.code, 1006);
    }

    #[tokio::test]
    async fn test_error_response_helper() {
        let response = error_response(
            StatusCode::METHOD_NOT_ALLOWED,
            "use GET".to_string(),
            ErrorCode::MethodNotAllowed,
        );
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let body = body_of(response).await;
        assert_eq!(body.code, 1005);
        assert_eq!(body.message, "use GET");
    }
}
