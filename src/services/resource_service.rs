//! Generic CRUD engine shared by every resource kind.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::crud::{CrudService, Resource};
use crate::config::MAX_PAGE_SIZE;
use crate::domain::Record;
use crate::errors::{AppError, AppResult};
use crate::infra::EntityStore;
use crate::types::{paginate, validate_params, PaginatedResponse};

/// Owns the store of one resource kind and enforces its rules.
///
/// Mutations hold the write lock across the uniqueness check and the write,
/// so concurrent creates/updates cannot both claim the same key.
pub struct ResourceService<R: Resource> {
    store: RwLock<EntityStore<R::Entity>>,
    max_page_size: u64,
}

impl<R: Resource> ResourceService<R> {
    /// Service pre-populated with the resource's seed data
    pub fn new() -> Self {
        Self::from_store(EntityStore::seeded(R::seed()))
    }

    /// Service with an empty store
    pub fn empty() -> Self {
        Self::from_store(EntityStore::new())
    }

    fn from_store(store: EntityStore<R::Entity>) -> Self {
        Self {
            store: RwLock::new(store),
            max_page_size: MAX_PAGE_SIZE,
        }
    }

    /// Override the upper bound for `limit`
    pub fn with_max_page_size(mut self, max_page_size: u64) -> Self {
        self.max_page_size = max_page_size.max(1);
        self
    }

    /// Number of live entities
    pub async fn total_count(&self) -> usize {
        self.store.read().await.len()
    }

    /// Page through the entities matching `predicate`, in store order
    pub async fn get_all_where<F>(
        &self,
        page: i64,
        limit: i64,
        predicate: F,
    ) -> AppResult<PaginatedResponse<R::Response>>
    where
        F: Fn(&R::Entity) -> bool + Send,
    {
        let params = validate_params(page, limit, self.max_page_size);
        let store = self.store.read().await;
        let responses: Vec<R::Response> = store
            .values()
            .filter(|entity| predicate(entity))
            .map(R::project)
            .collect();

        Ok(paginate(responses, params.page, params.limit))
    }

    #[cfg(test)]
    async fn entity(&self, id: &str) -> Option<R::Entity> {
        self.store.read().await.get(id).cloned()
    }
}

impl<R: Resource> Default for ResourceService<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Resource> CrudService for ResourceService<R> {
    type Response = R::Response;
    type Create = R::Create;
    type Update = R::Update;

    async fn get_by_id(&self, id: &str) -> AppResult<Option<R::Response>> {
        Ok(self.store.read().await.get(id).map(R::project))
    }

    async fn get_all(&self, page: i64, limit: i64) -> AppResult<PaginatedResponse<R::Response>> {
        self.get_all_where(page, limit, |_| true).await
    }

    async fn create(&self, data: R::Create) -> AppResult<R::Response> {
        let mut store = self.store.write().await;

        let key = R::create_key(&data);
        if store.values().any(|entity| R::unique_key(entity) == key) {
            return Err(AppError::duplicate(R::DUPLICATE_ON_CREATE));
        }

        let id = store.allocate_id();
        let entity = R::build(id, data, Utc::now());
        let response = R::project(&entity);

        tracing::debug!(resource = R::NAME, id = entity.id(), "Entity created");
        store.insert(entity);

        Ok(response)
    }

    async fn update(&self, id: &str, updates: R::Update) -> AppResult<Option<R::Response>> {
        let mut store = self.store.write().await;

        let Some(mut entity) = store.get(id).cloned() else {
            return Ok(None);
        };

        if let Some(key) = R::update_key(&updates) {
            let taken = store
                .values()
                .any(|other| other.id() != id && R::unique_key(other) == key);
            if taken {
                return Err(AppError::duplicate(R::DUPLICATE_ON_UPDATE));
            }
        }

        R::merge(&mut entity, updates);
        entity.touch(Utc::now());
        let response = R::project(&entity);

        tracing::debug!(resource = R::NAME, id, "Entity updated");
        store.insert(entity);

        Ok(Some(response))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let removed = self.store.write().await.remove(id).is_some();
        if removed {
            tracing::debug!(resource = R::NAME, id, "Entity deleted");
        }
        Ok(removed)
    }
}
