use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload posted by the browser extension
///
/// Both fields are optional at the serde layer so that a missing, `null` or
/// empty value all end up as the same validation failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RelayRequest {
    #[validate(required, length(min = 1))]
    #[serde(default, rename = "pluginData")]
    pub plugin_data: Option<String>,
    #[validate(required, length(min = 1))]
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,
}

impl RelayRequest {
    /// Returns `(plugin_data, user_id)` when both are present.
    pub fn into_parts(self) -> Option<(String, String)> {
        Some((self.plugin_data?, self.user_id?))
    }
}
