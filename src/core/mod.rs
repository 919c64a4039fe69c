// Core relay exports
pub mod prompt;
pub mod relay;

pub use prompt::{build_query, preview, PROMPT_TEMPLATE};
pub use relay::{HandleError, Relay};
