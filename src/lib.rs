//! Resource API - generic CRUD over in-memory stores
//!
//! Users and posts share one generic service and one generic controller;
//! each resource only supplies its strategy (seed data, uniqueness key,
//! construction, merge and projection).
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Entities, request payloads and validation rules
//! - **services**: Generic CRUD service and per-resource strategies
//! - **infra**: In-memory entity store
//! - **api**: Controller, handlers, middleware, and routes
//! - **types**: Shared types (pagination, responses)
//! - **utils**: Utility functions and helpers
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Bind somewhere else, with debug logs
//! cargo run -- -v serve --host 127.0.0.1 --port 8080
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Post, User};
pub use errors::{AppError, AppResult};
