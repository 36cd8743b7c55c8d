//! Unified error handling
//!
//! [`AppError`] is the application error type returned by every handler.
//! Each variant maps to one HTTP status; the response body is a small JSON
//! object carrying a short message:
//!
//! ```json
//! { "error": "Invalid start parameter. Must be a non-negative number." }
//! ```

use crate::db::StoreError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// JSON body of an error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Short human-readable message
    pub error: String,
}

/// Application error
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Bad request parameter (400)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Resource does not exist (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Payload failed validation (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Backing store read/write/parse failure (500)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Anything else (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            // Storage details go to the log, not the wire
            AppError::Storage(msg) => {
                error!(target: "storage", error = %msg, "Storage error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage unavailable".to_string(),
                )
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(msg) => AppError::NotFound(msg),
            StoreError::Validation(err) => AppError::Validation(err.to_string()),
            StoreError::Storage(msg) => AppError::Storage(msg),
        }
    }
}
