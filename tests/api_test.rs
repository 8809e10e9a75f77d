//! Integration tests for API endpoints.
//!
//! Requests go through the full router (extractors, controller, seeded
//! services, error boundary) via `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use mockall::mock;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;

use resource_api::api::middleware::handle_panic;
use resource_api::api::{create_router, AppState, ResourceController, ResourceLabels};
use resource_api::config::Config;
use resource_api::domain::{CreateUser, UpdateUser, UserResponse};
use resource_api::errors::{AppError, AppResult};
use resource_api::services::CrudService;
use resource_api::types::{paginate, PageQuery, PaginatedResponse};

// =============================================================================
// Helpers
// =============================================================================

fn app() -> Router {
    create_router(AppState::from_config(Config::default()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

// =============================================================================
// Health & documentation
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get_json(&app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert!(body["uptime"].is_number());
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, body) = get_json(&app(), "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/users/{id}"].is_object());
}

#[tokio::test]
async fn test_security_headers_are_set() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
        "nosniff"
    );
    assert_eq!(response.headers().get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn test_list_users_first_page() {
    let (status, body) = get_json(&app(), "/api/users?page=1&limit=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Users retrieved successfully");

    let data = &body["data"];
    assert_eq!(data["items"].as_array().unwrap().len(), 1);
    assert_eq!(data["items"][0]["email"], "john@seed-data.com");
    assert_eq!(data["total"], 2);
    assert_eq!(data["totalPages"], 2);
    assert_eq!(data["hasNext"], true);
    assert_eq!(data["hasPrevious"], false);
}

#[tokio::test]
async fn test_list_users_garbage_paging_uses_defaults() {
    let (status, body) = get_json(&app(), "/api/users?page=abc&limit=0").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["page"], 1);
    assert_eq!(body["data"]["limit"], 10);
}

#[tokio::test]
async fn test_list_users_repeated_page_key_keeps_envelope() {
    let (status, body) = get_json(&app(), "/api/users?page=1&page=2&limit=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["page"], 1);
    assert_eq!(body["data"]["limit"], 1);
}

#[tokio::test]
async fn test_list_users_limit_is_capped() {
    let (_, body) = get_json(&app(), "/api/users?limit=500").await;

    assert_eq!(body["data"]["limit"], 100);
}

#[tokio::test]
async fn test_get_user_hides_timestamps() {
    let (status, body) = get_json(&app(), "/api/users/2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User retrieved successfully");
    assert_eq!(body["data"]["name"], "Jane Smith");
    assert_eq!(body["data"]["isActive"], true);
    assert!(body["data"].get("createdAt").is_none());
    assert!(body["data"].get("updatedAt").is_none());
}

#[tokio::test]
async fn test_get_unknown_user() {
    let (status, body) = get_json(&app(), "/api/users/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "USER_NOT_FOUND");
    assert_eq!(body["error"]["message"], "User with ID 999 not found");
}

#[tokio::test]
async fn test_create_user() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "name": "Bob Stone", "email": "bob@example.com", "age": 41 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User created successfully");
    assert_eq!(body["data"]["id"], "3");

    let (status, _) = get_json(&app, "/api/users/3").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_create_user_reports_every_violation() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/api/users",
        Some(json!({ "name": "J", "email": "not-an-email", "age": 200 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "Request validation failed");
    assert_eq!(body["error"]["details"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_create_user_missing_age() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/api/users",
        Some(json!({ "name": "Bob Stone", "email": "bob@example.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["details"],
        json!(["Age must be a number between 0 and 150"])
    );
}

#[tokio::test]
async fn test_malformed_json_is_validation_error() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["details"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_wrong_json_type_is_validation_error() {
    let (status, body) = send(
        &app(),
        Method::PUT,
        "/api/users/1",
        Some(json!({ "isActive": "yes" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/api/users",
        Some(json!({ "name": "Bob", "email": "john@seed-data.com", "age": 20 })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "DUPLICATE_RESOURCE");
    assert_eq!(body["error"]["message"], "User with this email already exists");
}

#[tokio::test]
async fn test_update_user() {
    let (status, body) = send(
        &app(),
        Method::PUT,
        "/api/users/1",
        Some(json!({ "name": "Johnny Doe", "email": "john@seed-data.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User updated successfully");
    assert_eq!(body["data"]["name"], "Johnny Doe");
    assert_eq!(body["data"]["age"], 30);
}

#[tokio::test]
async fn test_update_user_to_taken_email() {
    let (status, body) = send(
        &app(),
        Method::PUT,
        "/api/users/2",
        Some(json!({ "email": "john@seed-data.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["message"], "Email already in use by another user");
}

#[tokio::test]
async fn test_update_unknown_user() {
    let (status, body) = send(
        &app(),
        Method::PUT,
        "/api/users/999",
        Some(json!({ "name": "Xavier" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_delete_user_twice() {
    let app = app();

    let (status, body) = send(&app, Method::DELETE, "/api/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User deleted successfully");
    assert!(body["data"].is_null());

    let (status, body) = send(&app, Method::DELETE, "/api/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "User with ID 1 not found");
}

// =============================================================================
// Posts
// =============================================================================

#[tokio::test]
async fn test_create_post_and_list_by_author() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/posts",
        Some(json!({
            "authorId": "2",
            "title": "Market Day",
            "content": "Stalls lined the harbour from dawn until dusk.",
            "isVisible": false
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Post created successfully");
    assert_eq!(body["data"]["isVisible"], false);
    // e.g. 2024-05-04T09:15:00.081Z
    assert_eq!(body["data"]["createdAt"].as_str().unwrap().len(), 24);

    let (status, body) = get_json(&app, "/api/posts/author/2?limit=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User posts retrieved successfully");
    assert_eq!(body["data"]["total"], 2);
    assert!(body["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .all(|post| post["authorId"] == "2"));
}

#[tokio::test]
async fn test_create_post_reports_every_violation() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/api/posts",
        Some(json!({ "title": "A", "content": "short" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["details"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_update_post_to_taken_title() {
    let (status, body) = send(
        &app(),
        Method::PUT,
        "/api/posts/1",
        Some(json!({ "title": "Local Food Festival is Back" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "DUPLICATE_RESOURCE");
}

#[tokio::test]
async fn test_get_unknown_post() {
    let (status, body) = get_json(&app(), "/api/posts/77").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "POST_NOT_FOUND");
    assert_eq!(body["error"]["message"], "Post with ID 77 not found");
}

// =============================================================================
// Error boundary
// =============================================================================

#[tokio::test]
async fn test_unknown_endpoint() {
    let (status, body) = send(&app(), Method::PATCH, "/api/widgets?x=1", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "ENDPOINT_NOT_FOUND");
    assert_eq!(body["error"]["message"], "Endpoint PATCH /api/widgets?x=1 not found");
}

#[tokio::test]
async fn test_panic_becomes_internal_error_envelope() {
    async fn explode() -> &'static str {
        panic!("boom")
    }

    let app = Router::new()
        .route("/explode", get(explode))
        .layer(CatchPanicLayer::custom(handle_panic));
    let (status, body) = get_json(&app, "/explode").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "INTERNAL_SERVER_ERROR");
    assert_eq!(body["error"]["message"], "An unexpected error occurred");
}

// =============================================================================
// Controller over a mocked service
// =============================================================================

mock! {
    pub Users {}

    #[async_trait]
    impl CrudService for Users {
        type Response = UserResponse;
        type Create = CreateUser;
        type Update = UpdateUser;

        async fn get_by_id(&self, id: &str) -> AppResult<Option<UserResponse>>;
        async fn get_all(&self, page: i64, limit: i64) -> AppResult<PaginatedResponse<UserResponse>>;
        async fn create(&self, data: CreateUser) -> AppResult<UserResponse>;
        async fn update(&self, id: &str, updates: UpdateUser) -> AppResult<Option<UserResponse>>;
        async fn delete(&self, id: &str) -> AppResult<bool>;
    }
}

fn controller(service: MockUsers) -> ResourceController<MockUsers> {
    ResourceController::new(Arc::new(service), ResourceLabels::USERS)
}

#[tokio::test]
async fn test_controller_passes_resolved_paging() {
    let mut service = MockUsers::new();
    service
        .expect_get_all()
        .withf(|page, limit| *page == 2 && *limit == 100)
        .times(1)
        .returning(|page, limit| Ok(paginate(Vec::new(), page as u64, limit as u64)));

    let reply = controller(service)
        .list_all(&PageQuery::new("2", "250"))
        .await
        .unwrap();

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body.data.unwrap().page, 2);
}

#[tokio::test]
async fn test_controller_maps_absent_to_not_found() {
    let mut service = MockUsers::new();
    service
        .expect_get_by_id()
        .withf(|id| id == "7")
        .returning(|_| Ok(None));

    let err = controller(service).get_one("7").await.unwrap_err();

    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert_eq!(err.code(), "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_service_failure_hides_details() {
    let mut service = MockUsers::new();
    service
        .expect_delete()
        .returning(|_| Err(AppError::internal("store poisoned")));

    let err = controller(service).delete_one("1").await.unwrap_err();
    let body = err.to_body();
    assert_eq!(body.error.code, "INTERNAL_SERVER_ERROR");
    assert_eq!(body.error.message, "An unexpected error occurred");

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
