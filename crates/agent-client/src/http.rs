//! HTTP Chat Client
//!
//! `GET {endpoint}?msg=<message>` against the personal chat endpoint.

use async_trait::async_trait;
use reqwest::Url;

use agent_core::AnswerResult;

use crate::config::ChatConfig;
use crate::error::{ClientError, Result};
use crate::service::ChatService;

/// reqwest-backed chat client
#[derive(Clone, Debug)]
pub struct HttpChatClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpChatClient {
    /// Create a client for `endpoint` with no timeout
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::from_config(ChatConfig::default().with_endpoint(endpoint))
    }

    /// Create from configuration
    pub fn from_config(config: ChatConfig) -> Result<Self> {
        let endpoint = config.url()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_config(ChatConfig::from_env())
    }

    /// Create with the default localhost endpoint
    pub fn localhost() -> Result<Self> {
        Self::from_config(ChatConfig::default())
    }

    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ChatService for HttpChatClient {
    async fn send_message(&self, message: &str) -> Result<AnswerResult> {
        tracing::debug!(endpoint = %self.endpoint, "sending chat message");

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("msg", message)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(%status, "failed to read error body: {}", e);
                    e.to_string()
                }
            };
            tracing::debug!(%status, %body, "chat request rejected");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        tracing::debug!(%status, response = %raw, "chat response");

        serde_json::from_value(raw).map_err(|e| ClientError::Decode(e.to_string()))
    }

    fn name(&self) -> &str {
        "http"
    }
}
