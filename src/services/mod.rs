// Service exports
pub mod chat;

pub use chat::{ChatCompletionClient, RelayError};
