use crate::config::UpstreamSettings;
use crate::models::{ChatCompletionRequest, ChatCompletionResponse};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors produced by a single chat-completion call
///
/// `Transport` covers everything up to receiving the full response body:
/// connection failures, timeouts and non-2xx statuses. `Internal` covers
/// anything that goes wrong afterwards while reading the body.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("LLM call failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("system error: {0}")]
    Internal(String),
}

/// Chat-completion API client
pub struct ChatCompletionClient {
    api_url: String,
    token: String,
    client: Client,
}

impl ChatCompletionClient {
    /// Create a new client; `timeout` bounds the whole call including the body read.
    pub fn new(api_url: String, token: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_url,
            token,
            client,
        })
    }

    pub fn from_settings(settings: &UpstreamSettings) -> Result<Self, reqwest::Error> {
        Self::new(
            settings.api_url.clone(),
            settings.token.clone(),
            settings.timeout(),
        )
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Send one non-streaming request and return the first message's content.
    pub async fn complete(&self, request: &ChatCompletionRequest) -> Result<String, RelayError> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;

        first_message_content(&body)
    }
}

/// Pull `messages[0].content` out of a raw response body
pub fn first_message_content(body: &[u8]) -> Result<String, RelayError> {
    let parsed: ChatCompletionResponse = serde_json::from_slice(body)
        .map_err(|e| RelayError::Internal(format!("invalid chat-completion response: {}", e)))?;

    parsed
        .messages
        .into_iter()
        .next()
        .map(|message| message.content)
        .ok_or_else(|| RelayError::Internal("chat-completion response has no messages".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_content() {
        let body = br#"{"messages":[{"content":"Score: 85","role":"assistant"},{"content":"ignored"}]}"#;
        assert_eq!(first_message_content(body).unwrap(), "Score: 85");
    }

    #[test]
    fn test_missing_messages_is_internal() {
        let err = first_message_content(br#"{"code":0}"#).unwrap_err();
        assert!(matches!(err, RelayError::Internal(_)));
        assert!(err.to_string().starts_with("system error: "));
        assert!(err.to_string().contains("messages"));
    }

    #[test]
    fn test_empty_messages_is_internal() {
        let err = first_message_content(br#"{"messages":[]}"#).unwrap_err();
        assert!(matches!(err, RelayError::Internal(_)));
    }

    #[test]
    fn test_non_json_body_is_internal() {
        let err = first_message_content(b"<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, RelayError::Internal(_)));
    }

    #[test]
    fn test_non_text_content_is_internal() {
        let err = first_message_content(br#"{"messages":[{"content":42}]}"#).unwrap_err();
        assert!(matches!(err, RelayError::Internal(_)));
    }

    #[test]
    fn test_client_from_settings() {
        let settings = UpstreamSettings {
            api_url: "http://localhost:9/v1/chat/completions".to_string(),
            token: "t".to_string(),
            bot_id: "b".to_string(),
            timeout_secs: 5,
        };
        let client = ChatCompletionClient::from_settings(&settings).unwrap();
        assert_eq!(client.api_url(), "http://localhost:9/v1/chat/completions");
    }
}
