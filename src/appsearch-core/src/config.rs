use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hosted App Search endpoint used when no base endpoint is configured
pub const DEFAULT_BASE_ENDPOINT: &str = "api.swiftype.com/api/as/v1";

/// Connection settings for an App Search deployment
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Account host key, prefixed to the base endpoint. Empty for self-managed hosts.
    #[serde(default, alias = "account_host_key")]
    pub host_identifier: String,

    pub api_key: String,

    #[serde(default = "default_base_endpoint")]
    pub base_endpoint: String,

    #[serde(default = "default_use_https")]
    pub use_https: bool,
}

fn default_base_endpoint() -> String {
    DEFAULT_BASE_ENDPOINT.to_string()
}

fn default_use_https() -> bool {
    true
}

impl ClientConfig {
    pub fn new(host_identifier: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            host_identifier: host_identifier.into(),
            api_key: api_key.into(),
            base_endpoint: default_base_endpoint(),
            use_https: default_use_https(),
        }
    }

    /// Point the client at a different deployment, e.g. `localhost:3002/api/as/v1`
    pub fn with_base_endpoint(mut self, base_endpoint: impl Into<String>) -> Self {
        self.base_endpoint = base_endpoint.into();
        self
    }

    pub fn with_https(mut self, use_https: bool) -> Self {
        self.use_https = use_https;
        self
    }

    /// Load configuration from a JSON file
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;
        let config: ClientConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path))?;
        tracing::debug!(path, base_url = %config.base_url(), "Loaded client config");
        Ok(config)
    }

    /// Build configuration from `APP_SEARCH_*` environment variables.
    ///
    /// `APP_SEARCH_API_KEY` is required; the host identifier, base endpoint
    /// and `APP_SEARCH_USE_HTTPS` fall back to their defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key =
            std::env::var("APP_SEARCH_API_KEY").context("APP_SEARCH_API_KEY is not set")?;
        let host_identifier = std::env::var("APP_SEARCH_HOST_IDENTIFIER").unwrap_or_default();

        let mut config = Self::new(host_identifier, api_key);
        if let Ok(base_endpoint) = std::env::var("APP_SEARCH_BASE_ENDPOINT") {
            config.base_endpoint = base_endpoint;
        }
        if let Ok(use_https) = std::env::var("APP_SEARCH_USE_HTTPS") {
            config.use_https = parse_flag(&use_https);
        }
        Ok(config)
    }

    /// Root URL every endpoint path is appended to
    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        let host_prefix = if self.host_identifier.is_empty() {
            String::new()
        } else {
            format!("{}.", self.host_identifier)
        };
        format!(
            "{}://{}{}",
            scheme,
            host_prefix,
            self.base_endpoint.trim_end_matches('/')
        )
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

// Keeps the API key out of logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host_identifier", &self.host_identifier)
            .field("api_key", &"<redacted>")
            .field("base_endpoint", &self.base_endpoint)
            .field("use_https", &self.use_https)
            .finish()
    }
}
