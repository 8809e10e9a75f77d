//! In-memory entity store.
//!
//! One store per resource kind. Entries are keyed by id and iterate in
//! insertion order; replacing an entry keeps its position. Ids come from a
//! monotonic counter and are never handed out twice.

use std::collections::HashMap;

use crate::domain::Record;

#[derive(Debug, Clone)]
pub struct EntityStore<E> {
    entries: HashMap<String, E>,
    order: Vec<String>,
    next_id: u64,
}

impl<E: Record> EntityStore<E> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
        }
    }

    /// Store pre-built entities, advancing the counter past their numeric ids
    pub fn seeded(seed: impl IntoIterator<Item = E>) -> Self {
        let mut store = Self::new();
        for entity in seed {
            store.advance_past(entity.id());
            store.insert(entity);
        }
        store
    }

    pub fn get(&self, id: &str) -> Option<&E> {
        self.entries.get(id)
    }

    /// Entities in insertion order
    pub fn values(&self) -> impl Iterator<Item = &E> + '_ {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    /// Insert or replace the entry keyed by the entity's id
    pub fn insert(&mut self, entity: E) -> Option<E> {
        let id = entity.id().to_string();
        let previous = self.entries.insert(id.clone(), entity);
        if previous.is_none() {
            self.order.push(id);
        }
        previous
    }

    pub fn remove(&mut self, id: &str) -> Option<E> {
        let removed = self.entries.remove(id)?;
        self.order.retain(|key| key != id);
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hand out the next id
    pub fn allocate_id(&mut self) -> String {
        let id = self.next_id;
        self.next_id += 1;
        id.to_string()
    }

    fn advance_past(&mut self, id: &str) {
        if let Ok(n) = id.parse::<u64>() {
            self.next_id = self.next_id.max(n.saturating_add(1));
        }
    }
}

impl<E: Record> Default for EntityStore<E> {
    fn default() -> Self {
        Self::new()
    }
}
