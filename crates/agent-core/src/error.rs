//! Error Types

use thiserror::Error;

/// Result type alias for agent-core operations
pub type Result<T> = std::result::Result<T, AgentError>;

/// Errors raised when interpreting stored answer data.
///
/// Storing never fails; only reading an opaque value into a concrete
/// shape can.
#[derive(Error, Debug)]
pub enum AgentError {
    /// Stored value not of the requested shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Decoding requested while no decision is stored
    #[error("No decision available")]
    MissingDecision,

    /// Decoding requested while no relation is stored
    #[error("No relation available")]
    MissingRelation,
}

impl AgentError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::Decode(_) => "The service returned data this client cannot read.".into(),
            Self::MissingDecision => "No decision has been made yet.".into(),
            Self::MissingRelation => "No relation has been extracted yet.".into(),
        }
    }
}
