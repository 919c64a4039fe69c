use crate::config::UpstreamSettings;
use crate::core::prompt::{build_query, preview, PREVIEW_CHARS};
use crate::models::{ChatCompletionRequest, RelayData, RelayRequest};
use crate::services::{ChatCompletionClient, RelayError};
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use thiserror::Error;
use tracing::Instrument;
use validator::Validate;

/// Why a relay request did not produce a result
#[derive(Debug, Error)]
pub enum HandleError {
    #[error("missing pluginData or userId parameter")]
    MissingParameter,

    #[error(transparent)]
    Relay(#[from] RelayError),
}

/// Relay orchestrator: validate, build the prompt, call upstream, shape the result
///
/// Holds only immutable state, so one instance serves every request.
pub struct Relay {
    client: ChatCompletionClient,
    bot_id: String,
}

impl Relay {
    pub fn new(client: ChatCompletionClient, bot_id: String) -> Self {
        Self { client, bot_id }
    }

    pub fn from_settings(settings: &UpstreamSettings) -> Result<Self, reqwest::Error> {
        Ok(Self::new(
            ChatCompletionClient::from_settings(settings)?,
            settings.bot_id.clone(),
        ))
    }

    /// Handle one raw POST body.
    pub async fn handle(&self, body: &[u8]) -> Result<RelayData, HandleError> {
        let span = tracing::info_span!("relay", request_id = %uuid::Uuid::new_v4());

        async move {
            let result = self.process(body).await;
            if let Err(e) = &result {
                match e {
                    HandleError::MissingParameter => tracing::info!("Rejected request: {}", e),
                    HandleError::Relay(_) => tracing::error!("{}", e),
                }
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn process(&self, body: &[u8]) -> Result<RelayData, HandleError> {
        let request = parse_request(body)?;

        if let Err(errors) = request.validate() {
            tracing::debug!("Validation failed: {:?}", errors);
            return Err(HandleError::MissingParameter);
        }
        let (plugin_data, user_id) = request.into_parts().ok_or(HandleError::MissingParameter)?;

        tracing::info!(
            user_id = %user_id,
            "Received plugin data: {}...",
            preview(&plugin_data, PREVIEW_CHARS)
        );

        let outbound = ChatCompletionRequest::new(
            build_query(&plugin_data),
            self.bot_id.clone(),
            user_id.clone(),
        );

        tracing::info!("Calling chat-completion API at {}", self.client.api_url());
        let matching_result = self.client.complete(&outbound).await?;
        tracing::info!(
            "Chat-completion API answered ({} chars)",
            matching_result.chars().count()
        );

        Ok(RelayData {
            matching_result,
            user_id,
            timestamp: utc_timestamp(),
        })
    }
}

/// Parse the inbound body. Anything that is not a JSON object is an internal
/// error, matching how the first deployment treated unreadable bodies.
pub fn parse_request(body: &[u8]) -> Result<RelayRequest, RelayError> {
    let mut value: Value = serde_json::from_slice(body)
        .map_err(|e| RelayError::Internal(format!("invalid request body: {}", e)))?;

    let Some(fields) = value.as_object_mut() else {
        return Err(RelayError::Internal(
            "request body must be a JSON object".to_string(),
        ));
    };

    // Empty values of any type count as missing; other non-strings stay type errors.
    for key in ["pluginData", "userId"] {
        if fields.get(key).is_some_and(is_empty_value) {
            fields.remove(key);
        }
    }

    serde_json::from_value(value)
        .map_err(|e| RelayError::Internal(format!("invalid request body: {}", e)))
}

/// `null`, `false`, zero, `""`, `[]` and `{}`
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Current time as ISO-8601 UTC with millisecond precision and a `Z` suffix
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
