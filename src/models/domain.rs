use serde::{Deserialize, Serialize};

/// Payload sent to the chat-completion API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub query: String,
    pub bot_id: String,
    pub user_id: String,
    pub stream: bool,
}

impl ChatCompletionRequest {
    /// Non-streaming request; the relay always waits for the full answer.
    pub fn new(query: String, bot_id: String, user_id: String) -> Self {
        Self {
            query,
            bot_id,
            user_id,
            stream: false,
        }
    }
}

/// Chat-completion API response. Only the fields the relay reads are modelled.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    pub content: String,
}
