//! # agent-core
//!
//! Answer data model and the session-lifetime state that chat answers flow into.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────┐ AnswerResult ┌──────────────┐  watch  ┌───────────────┐
//! │  Chat Client   │─────────────▶│  AgentStore  │────────▶│ StateObserver │
//! │ (agent-client) │              │ (one writer) │         │  (many UIs)   │
//! └────────────────┘              └──────────────┘         └───────────────┘
//! ```
//!
//! The store is an explicit handle rather than ambient global state: whoever
//! owns the `AgentStore` is the only writer, everyone else subscribes.

pub mod answer;
pub mod decision;
pub mod error;
pub mod lenient;
pub mod relation;
pub mod state;
pub mod store;

pub use answer::AnswerResult;
pub use decision::Decision;
pub use error::{AgentError, Result};
pub use lenient::Lenient;
pub use relation::ExtractedRelation;
pub use state::AgentState;
pub use store::{AgentStore, StateObserver};
