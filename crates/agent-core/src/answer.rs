//! Answer Payloads
//!
//! Body of a chat response: an optional relation, citations and decision.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::decision::Decision;
use crate::lenient::Lenient;
use crate::relation::ExtractedRelation;

/// A decoded chat answer.
///
/// Every recognised field is optional and JSON `null` counts as absent.
/// Fields of an unexpected shape are kept raw rather than rejected.
/// Anything else the service sends is kept in `extra` without interpretation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    /// Supporting sources, in ranking order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations: Option<Lenient<Vec<String>>>,

    /// Extracted fact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<Lenient<ExtractedRelation>>,

    /// Service-defined outcome
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<Decision>,

    /// Unrecognised top-level fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl AnswerResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_citations<I, S>(mut self, citations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.citations = Some(Lenient::Typed(citations.into_iter().map(Into::into).collect()));
        self
    }

    pub fn with_relation(mut self, relation: impl Into<Lenient<ExtractedRelation>>) -> Self {
        self.relation = Some(relation.into());
        self
    }

    pub fn with_decision(mut self, decision: impl Into<Decision>) -> Self {
        self.decision = Some(decision.into());
        self
    }

    /// Citations, if present and a list of strings
    pub fn citation_list(&self) -> Option<&[String]> {
        self.citations.as_ref()?.typed().map(Vec::as_slice)
    }

    /// Relation, if present and complete
    pub fn relation(&self) -> Option<&ExtractedRelation> {
        self.relation.as_ref()?.typed()
    }

    /// Whether a present field could not be read as its expected type
    pub fn has_raw_fields(&self) -> bool {
        self.citations.as_ref().is_some_and(|c| !c.is_typed())
            || self.relation.as_ref().is_some_and(|r| !r.is_typed())
    }

    /// Whether none of the recognised fields are present
    pub const fn is_empty(&self) -> bool {
        self.citations.is_none() && self.relation.is_none() && self.decision.is_none()
    }
}
