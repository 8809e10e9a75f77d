//! Infrastructure layer - Storage backing the services
//!
//! Services own their stores; nothing here knows about HTTP.

pub mod store;

pub use store::EntityStore;
