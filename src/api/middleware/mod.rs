//! API middleware.

mod fallback;
mod panic;
mod security_headers;

pub use fallback::endpoint_not_found;
pub use panic::handle_panic;
pub use security_headers::apply_security_headers;
