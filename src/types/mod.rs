//! Shared types for DRY compliance.

pub mod pagination;
mod response;

pub use pagination::{
    paginate, validate_params, PageQuery, PaginatedResponse, PaginationMeta,
    PaginationParams,
};
pub use response::{ApiResponse, Reply};
