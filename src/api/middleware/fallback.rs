//! Handler for requests that match no route.

use axum::http::{Method, Uri};

use crate::errors::AppError;

pub async fn endpoint_not_found(method: Method, uri: Uri) -> AppError {
    AppError::endpoint_not_found(method.as_str(), &uri.to_string())
}
