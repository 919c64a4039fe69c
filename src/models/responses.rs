use serde::{Deserialize, Serialize};

/// Body returned by `/api/relay` for every POST
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RelayData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RelayResponse {
    pub fn completed(data: RelayData) -> Self {
        Self {
            success: true,
            message: "relay complete".to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: "relay failed".to_string(),
            data: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayData {
    #[serde(rename = "matchingResult")]
    pub matching_result: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub timestamp: String,
}

/// Preflight acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejected_omits_optional_fields() {
        let body = serde_json::to_value(RelayResponse::rejected("missing")).unwrap();
        assert_eq!(body, json!({"success": false, "message": "missing"}));
    }

    #[test]
    fn test_failed_carries_error() {
        let body = serde_json::to_value(RelayResponse::failed("system error: boom")).unwrap();
        assert_eq!(
            body,
            json!({"success": false, "message": "relay failed", "error": "system error: boom"})
        );
    }

    #[test]
    fn test_completed_uses_camel_case() {
        let body = serde_json::to_value(RelayResponse::completed(RelayData {
            matching_result: "Score: 85".to_string(),
            user_id: "u123".to_string(),
            timestamp: "2024-01-01T00:00:00.000Z".to_string(),
        }))
        .unwrap();

        assert_eq!(body["data"]["matchingResult"], "Score: 85");
        assert_eq!(body["data"]["userId"], "u123");
        assert!(body.get("error").is_none());
    }
}
