use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::utils::time::now_iso;

/// Standard success envelope.
///
/// `data` is always present on the wire and is `null` for operations that
/// return nothing (e.g. deletes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            timestamp: now_iso(),
        }
    }

    /// Success envelope carrying `data: null`
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: message.into(),
            timestamp: now_iso(),
        }
    }
}

/// Success envelope paired with the status it is sent with
#[derive(Debug)]
pub struct Reply<T> {
    pub status: StatusCode,
    pub body: ApiResponse<T>,
}

impl<T> Reply<T> {
    /// 200 with data
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: ApiResponse::success(data, message),
        }
    }

    /// 201 with data (common pattern for POST endpoints)
    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CREATED,
            body: ApiResponse::success(data, message),
        }
    }

    /// 200 with `data: null`
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: ApiResponse::empty(message),
        }
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}
