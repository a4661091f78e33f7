//! Opaque Decisions
//!
//! The chat service attaches a decision of its own choosing to each answer.
//! It is stored untouched and only interpreted where a concrete shape is needed.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Service-defined outcome value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Decision(serde_json::Value);

impl Decision {
    pub const fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Decode into a concrete type
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(T::deserialize(&self.0)?)
    }

    /// The decision as text, if the service sent a plain string
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    pub const fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for Decision {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

impl From<&str> for Decision {
    fn from(value: &str) -> Self {
        Self(serde_json::Value::String(value.to_string()))
    }
}
