//! API layer - HTTP handlers and middleware
//!
//! This module contains all HTTP-related concerns:
//! - The generic resource controller
//! - Request handlers
//! - Middleware (panic recovery, security headers)
//! - Custom extractors
//! - Route definitions

pub mod controller;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use controller::{ResourceController, ResourceLabels};
pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
