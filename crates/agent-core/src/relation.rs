//! Extracted Relations
//!
//! A single fact the chat service extracted from conversation context.

use serde::{Deserialize, Serialize};

/// One extracted fact: `subject -[predicate]-> object`.
///
/// Flat value with no identity beyond its fields. The store swaps whole
/// instances; nothing mutates one in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedRelation {
    /// Subject entity identifier
    pub subject_id: String,

    /// Relation type tag (e.g. "causes")
    pub predicate_type: String,

    /// Object entity identifier
    pub object_id: String,

    /// Free-form quantification label (e.g. "all", "some")
    pub quantifier: String,

    /// `true` for an affirmative relation, `false` for a negated one
    pub polarity: bool,

    /// Extraction score, expected in `[0, 1]` but not enforced
    pub confidence: f64,

    /// Provenance label
    pub source: String,

    /// How the relation was produced (model version, strategy)
    pub generation: String,
}

impl ExtractedRelation {
    /// Create an affirmative relation with empty provenance fields
    pub fn new(
        subject_id: impl Into<String>,
        predicate_type: impl Into<String>,
        object_id: impl Into<String>,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            predicate_type: predicate_type.into(),
            object_id: object_id.into(),
            quantifier: String::new(),
            polarity: true,
            confidence: 0.0,
            source: String::new(),
            generation: String::new(),
        }
    }

    pub fn with_quantifier(mut self, quantifier: impl Into<String>) -> Self {
        self.quantifier = quantifier.into();
        self
    }

    pub fn with_polarity(mut self, polarity: bool) -> Self {
        self.polarity = polarity;
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_provenance(mut self, source: impl Into<String>, generation: impl Into<String>) -> Self {
        self.source = source.into();
        self.generation = generation.into();
        self
    }

    /// Whether the confidence lies in `[0, 1]`
    pub fn has_valid_confidence(&self) -> bool {
        (0.0..=1.0).contains(&self.confidence)
    }

    /// Whether the relation is negated
    pub const fn is_negated(&self) -> bool {
        !self.polarity
    }
}

impl std::fmt::Display for ExtractedRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.quantifier.is_empty() {
            write!(f, "{} ", self.quantifier)?;
        }
        let negation = if self.polarity { "" } else { "NOT " };
        write!(
            f,
            "{} -[{}{}]-> {}",
            self.subject_id, negation, self.predicate_type, self.object_id
        )
    }
}
