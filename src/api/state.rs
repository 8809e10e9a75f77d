//! Application state - Dependency injection container.
//!
//! Built once at startup and cloned into every handler.

use std::sync::Arc;
use std::time::Instant;

use super::controller::{ResourceController, ResourceLabels};
use crate::config::Config;
use crate::services::{PostService, UserService};

/// Application state containing both resource controllers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<ResourceController<UserService>>,
    pub posts: Arc<ResourceController<PostService>>,
    pub config: Arc<Config>,
    /// Process start, for the health endpoint's uptime
    pub started_at: Instant,
}

impl AppState {
    /// Create application state with seeded in-memory services.
    pub fn from_config(config: Config) -> Self {
        let users = Arc::new(UserService::new().with_max_page_size(config.max_page_size));
        let posts = Arc::new(PostService::new().with_max_page_size(config.max_page_size));

        Self::new(users, posts, config)
    }

    /// Create application state around existing services.
    pub fn new(users: Arc<UserService>, posts: Arc<PostService>, config: Config) -> Self {
        let users = ResourceController::new(users, ResourceLabels::USERS)
            .with_page_sizes(config.default_page_size, config.max_page_size);
        let posts = ResourceController::new(posts, ResourceLabels::POSTS)
            .with_page_sizes(config.default_page_size, config.max_page_size);

        Self {
            users: Arc::new(users),
            posts: Arc::new(posts),
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }
}
