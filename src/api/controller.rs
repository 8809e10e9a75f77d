//! Generic resource controller.
//!
//! Turns HTTP-shaped input (query strings, path ids, decoded bodies) into
//! service calls and wraps the outcome in the response envelope. Absent
//! results become resource-specific 404s here; every other failure is
//! returned as-is for the error boundary to render.

use std::sync::Arc;

use crate::config::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::errors::{AppError, AppResult};
use crate::services::CrudService;
use crate::types::{PageQuery, PaginatedResponse, Reply};

/// Names and codes a controller uses in its messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLabels {
    /// Singular name, e.g. `"User"`
    pub entity: &'static str,
    /// Plural name, e.g. `"Users"`
    pub plural: &'static str,
    /// Error code for a missing entity, e.g. `"USER_NOT_FOUND"`
    pub not_found_code: &'static str,
}

impl ResourceLabels {
    pub const USERS: Self = Self {
        entity: "User",
        plural: "Users",
        not_found_code: "USER_NOT_FOUND",
    };

    pub const POSTS: Self = Self {
        entity: "Post",
        plural: "Posts",
        not_found_code: "POST_NOT_FOUND",
    };

    pub fn not_found(&self, id: &str) -> AppError {
        AppError::not_found(
            self.not_found_code,
            format!("{} with ID {} not found", self.entity, id),
        )
    }

    fn message(&self, subject: &str, action: &str) -> String {
        format!("{} {} successfully", subject, action)
    }
}

pub struct ResourceController<S> {
    service: Arc<S>,
    labels: ResourceLabels,
    default_page_size: u64,
    max_page_size: u64,
}

impl<S: CrudService> ResourceController<S> {
    pub fn new(service: Arc<S>, labels: ResourceLabels) -> Self {
        Self {
            service,
            labels,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }

    /// Override the page size used for missing limits and the limit cap
    pub fn with_page_sizes(mut self, default_page_size: u64, max_page_size: u64) -> Self {
        self.max_page_size = max_page_size.max(1);
        self.default_page_size = default_page_size.clamp(1, self.max_page_size);
        self
    }

    pub fn service(&self) -> &Arc<S> {
        &self.service
    }

    /// Raw `(page, limit)` for a list query
    pub fn page_args(&self, query: &PageQuery) -> (i64, i64) {
        query.resolve(self.default_page_size, self.max_page_size)
    }

    pub async fn list_all(&self, query: &PageQuery) -> AppResult<Reply<PaginatedResponse<S::Response>>> {
        let (page, limit) = self.page_args(query);
        let listing = self.service.get_all(page, limit).await?;

        Ok(Reply::ok(listing, self.labels.message(self.labels.plural, "retrieved")))
    }

    pub async fn get_one(&self, id: &str) -> AppResult<Reply<S::Response>> {
        let entity = self
            .service
            .get_by_id(id)
            .await?
            .ok_or_else(|| self.labels.not_found(id))?;

        Ok(Reply::ok(entity, self.labels.message(self.labels.entity, "retrieved")))
    }

    pub async fn create_one(&self, data: S::Create) -> AppResult<Reply<S::Response>> {
        let created = self.service.create(data).await?;

        Ok(Reply::created(created, self.labels.message(self.labels.entity, "created")))
    }

    pub async fn update_one(&self, id: &str, updates: S::Update) -> AppResult<Reply<S::Response>> {
        let updated = self
            .service
            .update(id, updates)
            .await?
            .ok_or_else(|| self.labels.not_found(id))?;

        Ok(Reply::ok(updated, self.labels.message(self.labels.entity, "updated")))
    }

    pub async fn delete_one(&self, id: &str) -> AppResult<Reply<()>> {
        if !self.service.delete(id).await? {
            return Err(self.labels.not_found(id));
        }

        Ok(Reply::empty(self.labels.message(self.labels.entity, "deleted")))
    }
}
