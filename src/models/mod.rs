// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
pub use requests::RelayRequest;
pub use responses::{Ack, HealthResponse, RelayData, RelayResponse};
