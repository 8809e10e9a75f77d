//! Domain layer - Core business entities and logic
//!
//! This module contains the resource entities, their public projections and
//! the request payloads that create or modify them.
//!
//! DDD: Domain layer has NO infrastructure dependencies.

pub mod post;
pub mod rules;
pub mod user;

use chrono::{DateTime, Utc};

pub use post::{CreatePost, Post, PostResponse, UpdatePost};
pub use user::{CreateUser, UpdateUser, User, UserResponse};

/// Common shape of every stored entity.
pub trait Record: Clone + Send + Sync + 'static {
    /// Store key; unique per resource kind
    fn id(&self) -> &str;

    /// Mark the entity as modified at `at`
    fn touch(&mut self, at: DateTime<Utc>);
}
