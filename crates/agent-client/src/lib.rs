//! # agent-client
//!
//! Client side of the personal chat endpoint.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use agent_client::{ChatSession, HttpChatClient};
//!
//! let client = HttpChatClient::from_env()?;
//! let mut session = ChatSession::new(Arc::new(client));
//!
//! // One GET, then the store is overwritten with the answer
//! let state = session.ask("hello").await?;
//! println!("{:?}", state.relation);
//! ```
//!
//! Failures are returned as-is. Nothing is retried, and a failed request
//! leaves the store untouched.

pub mod config;
pub mod error;
pub mod http;
pub mod service;
pub mod session;

pub use config::ChatConfig;
pub use error::{ClientError, Result};
pub use http::HttpChatClient;
pub use service::ChatService;
pub use session::ChatSession;

// Re-export core types for convenience
pub use agent_core::{
    AgentState, AgentStore, AnswerResult, Decision, ExtractedRelation, StateObserver,
};
