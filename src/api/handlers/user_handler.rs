//! User handlers.

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};

use crate::api::extractors::{PageParams, ValidatedJson};
use crate::api::state::AppState;
use crate::domain::{CreateUser, UpdateUser, UserResponse};
use crate::errors::AppResult;
use crate::types::{PageQuery, PaginatedResponse, Reply};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List users, one page at a time
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of users")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    PageParams(query): PageParams,
) -> AppResult<Reply<PaginatedResponse<UserResponse>>> {
    state.users.list_all(&query).await
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Reply<UserResponse>> {
    state.users.get_one(&id).await
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUser>,
) -> AppResult<Reply<UserResponse>> {
    state.users.create_one(payload).await
}

/// Update a user; absent fields are left unchanged
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email in use by another user")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUser>,
) -> AppResult<Reply<UserResponse>> {
    state.users.update_one(&id, payload).await
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Reply<()>> {
    state.users.delete_one(&id).await
}
