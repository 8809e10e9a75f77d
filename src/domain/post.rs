//! Post domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::Record;

/// Post domain entity
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post; visible unless the payload says otherwise
    pub fn new(id: String, data: CreatePost, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: data.title,
            content: data.content,
            author_id: data.author_id,
            is_visible: data.is_visible.unwrap_or(true),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, updates: UpdatePost) {
        if let Some(title) = updates.title {
            self.title = title;
        }
        if let Some(content) = updates.content {
            self.content = content;
        }
        if let Some(is_visible) = updates.is_visible {
            self.is_visible = is_visible;
        }
    }
}

impl Record for Post {
    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

/// Post creation payload
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
    /// Id of the authoring user
    #[serde(default)]
    #[validate(custom(
        function = "crate::domain::rules::validate_not_blank",
        message = "Author ID is required"
    ))]
    #[schema(example = "1")]
    pub author_id: String,
    /// Title, unique among posts
    #[serde(default)]
    #[validate(length(
        min = "crate::config::MIN_TITLE_LENGTH",
        max = "crate::config::MAX_TITLE_LENGTH",
        message = "Title must be between 2 and 100 characters"
    ))]
    #[schema(example = "Local Food Festival is Back")]
    pub title: String,
    #[serde(default)]
    #[validate(length(
        min = "crate::config::MIN_CONTENT_LENGTH",
        max = "crate::config::MAX_CONTENT_LENGTH",
        message = "Content must be between 10 and 1000 characters"
    ))]
    pub content: String,
    /// Defaults to `true`
    pub is_visible: Option<bool>,
}

impl CreatePost {
    pub fn new(
        author_id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            author_id: author_id.into(),
            title: title.into(),
            content: content.into(),
            is_visible: None,
        }
    }
}

/// Post update payload; only present fields are validated and applied
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePost {
    #[validate(length(
        min = "crate::config::MIN_TITLE_LENGTH",
        max = "crate::config::MAX_TITLE_LENGTH",
        message = "Title must be between 2 and 100 characters"
    ))]
    pub title: Option<String>,
    #[validate(length(
        min = "crate::config::MIN_CONTENT_LENGTH",
        max = "crate::config::MAX_CONTENT_LENGTH",
        message = "Content must be between 10 and 1000 characters"
    ))]
    pub content: Option<String>,
    pub is_visible: Option<bool>,
}

impl UpdatePost {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// Post response; keeps the creation time, drops the modification time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    #[schema(example = "1")]
    pub id: String,
    pub title: String,
    pub content: String,
    #[schema(example = "1")]
    pub author_id: String,
    pub is_visible: bool,
    #[serde(serialize_with = "crate::utils::time::serialize_iso")]
    pub created_at: DateTime<Utc>,
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            content: post.content.clone(),
            author_id: post.author_id.clone(),
            is_visible: post.is_visible,
            created_at: post.created_at,
        }
    }
}
