//! Chat Session
//!
//! Sends a message and, only if an answer comes back, applies it to the
//! store the session owns.

use std::sync::Arc;

use agent_core::{AgentState, AgentStore, StateObserver};

use crate::error::Result;
use crate::service::ChatService;

/// A chat backend paired with the store its answers are written to
pub struct ChatSession {
    service: Arc<dyn ChatService>,
    store: AgentStore,
}

impl ChatSession {
    /// Create a session with a fresh store
    pub fn new(service: Arc<dyn ChatService>) -> Self {
        Self::with_store(service, AgentStore::new())
    }

    /// Create a session writing into an existing store
    pub fn with_store(service: Arc<dyn ChatService>, store: AgentStore) -> Self {
        Self { service, store }
    }

    /// Send `message` and overwrite the store with the answer.
    ///
    /// On failure the error is returned unchanged and the store is not touched.
    pub async fn ask(&mut self, message: &str) -> Result<AgentState> {
        let answer = self.service.send_message(message).await.inspect_err(|e| {
            tracing::warn!(service = self.service.name(), "chat request failed: {}", e);
        })?;

        self.store.update_from_answer_result(answer);
        Ok(self.store.snapshot())
    }

    pub const fn store(&self) -> &AgentStore {
        &self.store
    }

    /// Register an observer on the session's store
    pub fn subscribe(&self) -> StateObserver {
        self.store.subscribe()
    }

    pub fn into_store(self) -> AgentStore {
        self.store
    }
}
