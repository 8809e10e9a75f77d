//! Post handlers.

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};

use crate::api::controller::ResourceController;
use crate::api::extractors::{PageParams, ValidatedJson};
use crate::api::state::AppState;
use crate::domain::{CreatePost, PostResponse, UpdatePost};
use crate::errors::AppResult;
use crate::services::PostService;
use crate::types::{PageQuery, PaginatedResponse, Reply};

/// Create post routes
pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/author/:author_id", get(list_posts_by_author))
        .route("/:id", get(get_post).put(update_post).delete(delete_post))
}

impl ResourceController<PostService> {
    /// One page of the posts written by `author_id`
    pub async fn list_by_author(
        &self,
        author_id: &str,
        query: &PageQuery,
    ) -> AppResult<Reply<PaginatedResponse<PostResponse>>> {
        let (page, limit) = self.page_args(query);
        let listing = self
            .service()
            .get_all_by_author(author_id, page, limit)
            .await?;

        Ok(Reply::ok(listing, "User posts retrieved successfully"))
    }
}

/// List posts, one page at a time
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "Posts",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of posts")
    )
)]
pub async fn list_posts(
    State(state): State<AppState>,
    PageParams(query): PageParams,
) -> AppResult<Reply<PaginatedResponse<PostResponse>>> {
    state.posts.list_all(&query).await
}

/// List posts by one author
#[utoipa::path(
    get,
    path = "/api/posts/author/{author_id}",
    tag = "Posts",
    params(
        ("author_id" = String, Path, description = "Author user ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Page of the author's posts")
    )
)]
pub async fn list_posts_by_author(
    State(state): State<AppState>,
    Path(author_id): Path<String>,
    PageParams(query): PageParams,
) -> AppResult<Reply<PaginatedResponse<PostResponse>>> {
    state.posts.list_by_author(&author_id, &query).await
}

/// Get post by ID
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = "Posts",
    params(
        ("id" = String, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post found", body = PostResponse),
        (status = 404, description = "Post not found")
    )
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Reply<PostResponse>> {
    state.posts.get_one(&id).await
}

/// Create a post
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "Posts",
    request_body = CreatePost,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Title already taken")
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePost>,
) -> AppResult<Reply<PostResponse>> {
    state.posts.create_one(payload).await
}

/// Update a post
#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    tag = "Posts",
    params(
        ("id" = String, Path, description = "Post ID")
    ),
    request_body = UpdatePost,
    responses(
        (status = 200, description = "Post updated", body = PostResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Post not found"),
        (status = 409, description = "Title in use by another post")
    )
)]
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdatePost>,
) -> AppResult<Reply<PostResponse>> {
    state.posts.update_one(&id, payload).await
}

/// Delete a post
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = "Posts",
    params(
        ("id" = String, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post deleted"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Reply<()>> {
    state.posts.delete_one(&id).await
}
