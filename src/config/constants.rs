//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Pagination
// =============================================================================

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Maximum allowed items per page
pub const MAX_PAGE_SIZE: u64 = 100;

/// Default starting page number (1-indexed)
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Maximum accepted request body size (10 MiB)
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

// =============================================================================
// Error Codes
// =============================================================================

pub const CODE_VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const CODE_DUPLICATE_RESOURCE: &str = "DUPLICATE_RESOURCE";
pub const CODE_ENDPOINT_NOT_FOUND: &str = "ENDPOINT_NOT_FOUND";
pub const CODE_INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";

/// Message shown for every validation failure; rule violations go in `details`
pub const VALIDATION_FAILED_MESSAGE: &str = "Request validation failed";

/// Message shown for internal failures (details are only logged)
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

// =============================================================================
// Validation
// =============================================================================

/// Minimum trimmed length of a user name
pub const MIN_NAME_LENGTH: usize = 2;

/// Inclusive bounds for a user's age
pub const MIN_AGE: i64 = 0;
pub const MAX_AGE: i64 = 150;

/// Post title length bounds (characters)
pub const MIN_TITLE_LENGTH: u64 = 2;
pub const MAX_TITLE_LENGTH: u64 = 100;

/// Post content length bounds (characters)
pub const MIN_CONTENT_LENGTH: u64 = 10;
pub const MAX_CONTENT_LENGTH: u64 = 1000;
