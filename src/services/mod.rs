//! Application services layer - Use cases and business logic.
//!
//! One generic engine ([`ResourceService`]) holds the CRUD rules; each
//! resource kind supplies a [`Resource`] strategy for it.

mod crud;
mod post_service;
mod resource_service;
mod user_service;

pub use crud::{CrudService, Resource};
pub use post_service::{PostResource, PostService};
pub use resource_service::ResourceService;
pub use user_service::{UserResource, UserService};
