//! Type-safe error codes for API responses.
//!
//! Each error code carries:
//! - String representation for client consumption (e.g., "NOT_FOUND")
//! - Integer code for logging and monitoring (e.g., 1004)
//! - Default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::NotFound;
//! assert_eq!(code.as_str(), "NOT_FOUND");
//! assert_eq!(code.code(), 1004);
//! assert_eq!(code.default_message(), "Resource not found");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request body is not valid JSON
    InvalidJson,

    /// Request body is missing or has the wrong content type
    JsonExtraction,

    /// Requested resource was not found
    NotFound,

    /// HTTP method is not supported on this route
    MethodNotAllowed,

    // Server errors
    /// An unexpected internal server error occurred
    InternalError,

    // I/O errors (4000s)
    /// Socket or file system I/O error
    IoError,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier clients can match on.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidJson => "INVALID_JSON",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::IoError => "IO_ERROR",
        }
    }

    /// Integer code for structured logs.
    ///
    /// Ranges:
    /// - 1000-1999: Client and generic server errors
    /// - 4000-4999: I/O errors
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidJson => 1001,
            Self::JsonExtraction => 1002,
            Self::NotFound => 1004,
            Self::MethodNotAllowed => 1005,
            Self::InternalError => 1006,
            Self::IoError => 4001,
        }
    }

    /// Default user-facing error message.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::InvalidJson => "Invalid JSON format",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            Self::InternalError => "An internal server error occurred",
            Self::IoError => "I/O error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
