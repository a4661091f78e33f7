//! Chat Service Abstraction
//!
//! Anything that turns a message into an `AnswerResult`. The HTTP client is
//! the real implementation; sessions and tests only see this trait.

use async_trait::async_trait;

use agent_core::AnswerResult;

use crate::error::Result;

/// Chat backend (Strategy pattern)
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Send one message and return the decoded answer.
    ///
    /// Exactly one request per call; no retries.
    async fn send_message(&self, message: &str) -> Result<AnswerResult>;

    /// Backend name, for logs
    fn name(&self) -> &str;
}
