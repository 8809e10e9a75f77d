//! Post resource - seed data, title uniqueness and author filtering.

use chrono::{DateTime, Utc};

use super::crud::Resource;
use super::ResourceService;
use crate::domain::{CreatePost, Post, PostResponse, UpdatePost};
use crate::errors::AppResult;
use crate::types::PaginatedResponse;

/// Post service: the generic engine specialized for posts
pub type PostService = ResourceService<PostResource>;

/// Posts are unique by title and keep their creation time in responses.
pub struct PostResource;

impl Resource for PostResource {
    type Entity = Post;
    type Response = PostResponse;
    type Create = CreatePost;
    type Update = UpdatePost;

    const NAME: &'static str = "Post";
    const DUPLICATE_ON_CREATE: &'static str = "Post with this title already exists";
    const DUPLICATE_ON_UPDATE: &'static str = "Title already in use by another post";

    fn seed() -> Vec<Post> {
        let now = Utc::now();
        vec![
            Post::new(
                "1".to_string(),
                CreatePost::new(
                    "1",
                    "Red Arrows Fly over Isle of Man",
                    "The Red Arrows performed a stunning display over the Isle of Man, \
                     showcasing their incredible flying skills and precision.",
                ),
                now,
            ),
            Post::new(
                "2".to_string(),
                CreatePost::new(
                    "2",
                    "Local Food Festival is Back",
                    "The annual local food festival returns this weekend, featuring a \
                     variety of local vendors and delicious food options.",
                ),
                now,
            ),
        ]
    }

    fn unique_key(post: &Post) -> &str {
        &post.title
    }

    fn create_key(data: &CreatePost) -> &str {
        &data.title
    }

    fn update_key(updates: &UpdatePost) -> Option<&str> {
        updates.title.as_deref()
    }

    fn build(id: String, data: CreatePost, now: DateTime<Utc>) -> Post {
        Post::new(id, data, now)
    }

    fn merge(post: &mut Post, updates: UpdatePost) {
        post.apply(updates);
    }

    fn project(post: &Post) -> PostResponse {
        PostResponse::from(post)
    }
}

impl ResourceService<PostResource> {
    /// Posts written by `author_id`, paginated like [`get_all`](super::CrudService::get_all)
    pub async fn get_all_by_author(
        &self,
        author_id: &str,
        page: i64,
        limit: i64,
    ) -> AppResult<PaginatedResponse<PostResponse>> {
        self.get_all_where(page, limit, |post| post.author_id == author_id)
            .await
    }
}
