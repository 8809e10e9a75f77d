//! OpenAPI documentation configuration.
//!
//! The document is served as JSON at `/api-docs/openapi.json`.

use utoipa::OpenApi;

use crate::api::handlers::{health_handler, post_handler, user_handler};
use crate::domain::{CreatePost, CreateUser, PostResponse, UpdatePost, UpdateUser, UserResponse};

/// OpenAPI documentation for the resource API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Resource API",
        version = "0.1.0",
        description = "CRUD API for users and posts with pagination and a uniform response envelope",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        health_handler::health_check,
        // User endpoints
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Post endpoints
        post_handler::list_posts,
        post_handler::list_posts_by_author,
        post_handler::get_post,
        post_handler::create_post,
        post_handler::update_post,
        post_handler::delete_post,
    ),
    components(
        schemas(
            health_handler::HealthResponse,
            UserResponse,
            CreateUser,
            UpdateUser,
            PostResponse,
            CreatePost,
            UpdatePost,
        )
    ),
    tags(
        (name = "Health", description = "Liveness check"),
        (name = "Users", description = "User management operations"),
        (name = "Posts", description = "Post management operations")
    )
)]
pub struct ApiDoc;
