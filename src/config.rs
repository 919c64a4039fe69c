use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

/// Chat-completion API the relay forwards to
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamSettings {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    pub token: String,
    pub bot_id: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl UpstreamSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3000 }
fn default_api_url() -> String { "https://api.coze.cn/v1/chat/completions".to_string() }
fn default_timeout_secs() -> u64 { 30 }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration files (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with RELAY__)
    /// 4. Deployment variables kept from the first release (COZE_PAT, COZE_BOT_ID, COZE_API_URL, PORT)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., RELAY__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("RELAY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        apply_deployment_env(settings)?.try_deserialize()
    }
}

/// Overlay the plain variable names the relay was first deployed with.
/// Values are set as strings so numeric-looking bot ids keep their digits.
fn apply_deployment_env(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let overrides = [
        ("COZE_PAT", "upstream.token"),
        ("COZE_BOT_ID", "upstream.bot_id"),
        ("COZE_API_URL", "upstream.api_url"),
        ("PORT", "server.port"),
    ];

    let mut builder = Config::builder().add_source(settings);
    for (var, key) in overrides {
        if let Ok(value) = env::var(var) {
            builder = builder.set_override(key, value)?;
        }
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<Settings, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_default_server() {
        let server = ServerSettings::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 3000);
        assert!(server.workers.is_none());
    }

    #[test]
    fn test_upstream_defaults_fill_in() {
        let settings = from_toml(
            r#"
            [upstream]
            token = "pat_123"
            bot_id = "7412345"
            "#,
        )
        .unwrap();

        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.upstream.api_url, "https://api.coze.cn/v1/chat/completions");
        assert_eq!(settings.upstream.timeout(), Duration::from_secs(30));
        assert_eq!(settings.upstream.bot_id, "7412345");
    }

    #[test]
    fn test_missing_token_is_an_error() {
        let result = from_toml(
            r#"
            [upstream]
            bot_id = "bot"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_string_port_override() {
        let base = Config::builder()
            .add_source(File::from_str(
                "[upstream]\ntoken = \"t\"\nbot_id = \"b\"\n",
                FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let settings: Settings = Config::builder()
            .add_source(base)
            .set_override("server.port", "8080")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 8080);
    }
}
