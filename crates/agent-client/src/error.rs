//! Client Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ClientError>;

/// A failed chat request.
///
/// There is one kind of failure from the caller's point of view (the request
/// did not produce an answer); the variants say why.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection, DNS, timeout or other transport failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint answered with a non-2xx status
    #[error("Endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not a JSON object of the expected shape
    #[error("Response decode error: {0}")]
    Decode(String),

    /// Client could not be built from its configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status of the failed response, if one was received
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            Self::Transport(_) => "The chat service could not be reached.",
            Self::Status { status, .. } if *status >= 500 => "The chat service ran into a problem.",
            Self::Status { .. } => "The chat service rejected the request.",
            Self::Decode(_) => "The chat service sent an answer this client cannot read.",
            Self::Config(_) => "The chat client is misconfigured.",
        }
    }
}
