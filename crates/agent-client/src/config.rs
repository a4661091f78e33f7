//! Chat Client Configuration

use std::time::Duration;

use reqwest::Url;

use crate::error::{ClientError, Result};

/// Endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/chat/personal";

/// Chat client configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatConfig {
    /// Full URL of the chat endpoint, without query string
    pub endpoint: String,

    /// Request timeout in seconds. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout_secs: None,
        }
    }
}

impl ChatConfig {
    /// Defaults overridden by `CHAT_ENDPOINT` and `CHAT_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        let endpoint = std::env::var("CHAT_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.into());
        let timeout_secs = std::env::var("CHAT_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok());

        Self {
            endpoint,
            timeout_secs,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub const fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Parsed endpoint URL
    pub fn url(&self) -> Result<Url> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| ClientError::Config(format!("invalid endpoint '{}': {}", self.endpoint, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ClientError::Config(format!("unsupported scheme '{other}'"))),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
