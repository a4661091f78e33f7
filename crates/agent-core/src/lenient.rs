//! Leniently Decoded Fields
//!
//! Answer fields are stored whatever shape they arrive in. When the value
//! matches the expected type it is kept typed; otherwise the raw JSON is
//! kept and decoding is deferred to whoever needs the concrete shape.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A value of the expected type, or the raw JSON it could not be read as.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Lenient<T> {
    /// Matched the expected shape
    Typed(T),

    /// Any other JSON value, kept verbatim
    Raw(serde_json::Value),
}

impl<T> Lenient<T> {
    /// The typed value, if the field had the expected shape
    pub const fn typed(&self) -> Option<&T> {
        match self {
            Self::Typed(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// The raw JSON, if the field did not have the expected shape
    pub const fn raw(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Typed(_) => None,
            Self::Raw(value) => Some(value),
        }
    }

    pub const fn is_typed(&self) -> bool {
        matches!(self, Self::Typed(_))
    }
}

impl<T: Clone + DeserializeOwned> Lenient<T> {
    /// Decode into `T`, failing if the stored raw value does not fit
    pub fn decode(&self) -> Result<T> {
        match self {
            Self::Typed(value) => Ok(value.clone()),
            Self::Raw(value) => Ok(T::deserialize(value)?),
        }
    }
}

impl<T> From<T> for Lenient<T> {
    fn from(value: T) -> Self {
        Self::Typed(value)
    }
}
