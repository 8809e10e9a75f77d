//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic conversion into the error envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::config::{
    CODE_DUPLICATE_RESOURCE, CODE_ENDPOINT_NOT_FOUND, CODE_INTERNAL_SERVER_ERROR,
    CODE_VALIDATION_ERROR, INTERNAL_ERROR_MESSAGE, VALIDATION_FAILED_MESSAGE,
};
use crate::utils::time::now_iso;

/// Application error types.
///
/// The HTTP boundary dispatches on the variant; messages are for humans only.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or out-of-range input, one entry per violated rule
    #[error("Request validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Uniqueness violation
    #[error("{0}")]
    Duplicate(String),

    /// Absent resource or route, with a machine-readable code
    #[error("{message}")]
    NotFound { code: String, message: String },

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error envelope
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorBody,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &str {
        match self {
            AppError::Validation(_) => CODE_VALIDATION_ERROR,
            AppError::Duplicate(_) => CODE_DUPLICATE_RESOURCE,
            AppError::NotFound { code, .. } => code.as_str(),
            AppError::Internal(_) => CODE_INTERNAL_SERVER_ERROR,
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Duplicate(_) => StatusCode::CONFLICT,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Validation(_) => VALIDATION_FAILED_MESSAGE.to_string(),
            AppError::Duplicate(msg) => msg.clone(),
            AppError::NotFound { message, .. } => message.clone(),
            AppError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    /// Build the error envelope for this error.
    pub fn to_body(&self) -> ErrorResponse {
        let details = match self {
            AppError::Validation(details) => Some(details.clone()),
            _ => None,
        };

        ErrorResponse {
            success: false,
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
                details,
            },
            timestamp: now_iso(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Internal(msg) => tracing::error!(code = self.code(), "Internal error: {}", msg),
            other => tracing::warn!(code = other.code(), "Request failed: {}", other),
        }

        (self.status(), Json(self.to_body())).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(details: Vec<String>) -> Self {
        AppError::Validation(details)
    }

    pub fn duplicate(msg: impl Into<String>) -> Self {
        AppError::Duplicate(msg.into())
    }

    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::NotFound {
            code: code.into(),
            message: message.into(),
        }
    }

    /// 404 for a request that matched no route
    pub fn endpoint_not_found(method: &str, uri: &str) -> Self {
        AppError::not_found(
            CODE_ENDPOINT_NOT_FOUND,
            format!("Endpoint {} {} not found", method, uri),
        )
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
