//! Application route configuration.

use axum::{extract::DefaultBodyLimit, response::Json, routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::handlers::{health_check, post_routes, user_routes};
use super::middleware::{apply_security_headers, endpoint_not_found, handle_panic};
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.body_limit_bytes;

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/api/users", user_routes())
        .nest("/api/posts", post_routes())
        .fallback(endpoint_not_found)
        // Global middleware
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state);

    apply_security_headers(app)
}

/// Generated OpenAPI document
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
