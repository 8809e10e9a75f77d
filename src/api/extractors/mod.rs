//! Custom request extractors.

mod page_params;
mod validated_json;

pub use page_params::PageParams;
pub use validated_json::{collect_messages, ValidatedJson};
