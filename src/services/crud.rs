//! Service contracts.
//!
//! [`CrudService`] is what controllers talk to. [`Resource`] is what a
//! resource kind plugs into the generic [`ResourceService`](super::ResourceService)
//! engine: entity construction, merge rules, projection and the uniqueness key.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::Record;
use crate::errors::AppResult;
use crate::types::PaginatedResponse;

/// CRUD operations over one resource kind.
///
/// A missing entity is reported as `Ok(None)` / `Ok(false)`, never as an
/// error; errors are reserved for rule violations and backend failures.
#[async_trait]
pub trait CrudService: Send + Sync {
    type Response: Send + 'static;
    type Create: Send + 'static;
    type Update: Send + 'static;

    async fn get_by_id(&self, id: &str) -> AppResult<Option<Self::Response>>;

    /// Page through all entities; `page` and `limit` are clamped before use
    async fn get_all(&self, page: i64, limit: i64) -> AppResult<PaginatedResponse<Self::Response>>;

    /// Fails with `AppError::Duplicate` when the uniqueness key is taken
    async fn create(&self, data: Self::Create) -> AppResult<Self::Response>;

    /// `Ok(None)` for an unknown id; `AppError::Duplicate` when the new key
    /// belongs to another entity
    async fn update(&self, id: &str, updates: Self::Update) -> AppResult<Option<Self::Response>>;

    /// `true` if an entity was removed
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// Resource-specific strategy for the generic service engine.
pub trait Resource: Send + Sync + 'static {
    type Entity: Record;
    type Response: Send + 'static;
    type Create: Send + 'static;
    type Update: Send + 'static;

    /// Singular display name, e.g. `"User"`
    const NAME: &'static str;

    /// Message for a create that collides with an existing key
    const DUPLICATE_ON_CREATE: &'static str;

    /// Message for an update that collides with another entity's key
    const DUPLICATE_ON_UPDATE: &'static str;

    /// Entities present when the service is constructed
    fn seed() -> Vec<Self::Entity>;

    /// Value of the uniqueness key on a stored entity
    fn unique_key(entity: &Self::Entity) -> &str;

    /// Value of the uniqueness key in a create payload
    fn create_key(data: &Self::Create) -> &str;

    /// Value of the uniqueness key in an update payload, if it sets one
    fn update_key(updates: &Self::Update) -> Option<&str>;

    fn build(id: String, data: Self::Create, now: DateTime<Utc>) -> Self::Entity;

    /// Overwrite present fields; timestamps are handled by the engine
    fn merge(entity: &mut Self::Entity, updates: Self::Update);

    fn project(entity: &Self::Entity) -> Self::Response;
}
