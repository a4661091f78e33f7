//! Agent State
//!
//! The latest chat-derived state, as read by whatever renders it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::answer::AnswerResult;
use crate::decision::Decision;
use crate::error::{AgentError, Result};
use crate::lenient::Lenient;
use crate::relation::ExtractedRelation;

/// Latest relation, citations and decision.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    /// Most recent extracted relation, as received
    pub relation: Option<Lenient<ExtractedRelation>>,

    /// Citations of the most recent answer, as received.
    ///
    /// Starts as an empty list. Becomes `None` after an answer that carried
    /// no citations at all; this is not normalised back to an empty list.
    pub citations: Option<Lenient<Vec<String>>>,

    /// Most recent decision
    pub decision: Option<Decision>,
}

impl Default for AgentState {
    fn default() -> Self {
        Self {
            relation: None,
            citations: Some(Lenient::Typed(Vec::new())),
            decision: None,
        }
    }
}

impl AgentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the state derived from a single answer
    pub fn from_answer(result: AnswerResult) -> Self {
        let mut state = Self::new();
        state.apply(result);
        state
    }

    /// Overwrite every field from `result`.
    ///
    /// No merge with the previous state: fields missing from `result` end
    /// up `None`.
    pub fn apply(&mut self, result: AnswerResult) {
        let AnswerResult {
            citations,
            relation,
            decision,
            ..
        } = result;

        *self = Self {
            relation,
            citations,
            decision,
        };
    }

    /// Citations as a slice, empty when missing or not a list of strings
    pub fn citation_list(&self) -> &[String] {
        self.citations
            .as_ref()
            .and_then(Lenient::typed)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The relation, if one was stored with the expected shape
    pub fn relation(&self) -> Option<&ExtractedRelation> {
        self.relation.as_ref()?.typed()
    }

    /// Decode the stored relation, including one that arrived raw
    pub fn decode_relation(&self) -> Result<ExtractedRelation> {
        self.relation
            .as_ref()
            .ok_or(AgentError::MissingRelation)?
            .decode()
    }

    /// Decode the current decision into a concrete type
    pub fn decode_decision<T: DeserializeOwned>(&self) -> Result<T> {
        self.decision
            .as_ref()
            .ok_or(AgentError::MissingDecision)?
            .decode()
    }

    /// Whether the last answer omitted citations entirely
    pub const fn citations_missing(&self) -> bool {
        self.citations.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_relation() -> ExtractedRelation {
        ExtractedRelation::new("s1", "causes", "o1")
            .with_quantifier("all")
            .with_confidence(0.9)
            .with_provenance("docA", "v1")
    }

    #[test]
    fn test_initial_state() {
        let state = AgentState::new();
        assert_eq!(state.relation, None);
        assert_eq!(state.citations, Some(Lenient::Typed(Vec::new())));
        assert_eq!(state.decision, None);
        assert!(!state.citations_missing());
    }

    #[test]
    fn test_apply_full_answer() {
        let answer = AnswerResult::new()
            .with_citations(["doc1"])
            .with_relation(sample_relation())
            .with_decision("approve");

        let state = AgentState::from_answer(answer);
        assert_eq!(state.citation_list(), ["doc1".to_string()]);
        assert_eq!(state.relation(), Some(&sample_relation()));
        assert_eq!(state.decision, Some(Decision::from("approve")));
    }

    #[test]
    fn test_apply_empty_answer_leaves_citations_missing() {
        let mut state = AgentState::from_answer(
            AnswerResult::new()
                .with_citations(["doc1"])
                .with_relation(sample_relation())
                .with_decision("approve"),
        );

        state.apply(AnswerResult::new());

        assert_eq!(state.citations, None);
        assert_eq!(state.relation, None);
        assert_eq!(state.decision, None);
        assert!(state.citations_missing());
        assert!(state.citation_list().is_empty());
    }

    #[test]
    fn test_decode_decision() {
        let state = AgentState::new();
        assert!(matches!(
            state.decode_decision::<String>(),
            Err(AgentError::MissingDecision)
        ));

        let state = AgentState::from_answer(AnswerResult::new().with_decision("approve"));
        assert_eq!(state.decode_decision::<String>().unwrap(), "approve");
        assert!(state.decode_decision::<u32>().is_err());
    }

    #[test]
    fn test_apply_stores_unexpected_shapes() {
        let answer: AnswerResult = serde_json::from_value(json!({
            "citations": "doc1",
            "relation": { "subjectId": "s1", "predicateType": "causes", "objectId": "o1" },
            "decision": 7
        }))
        .unwrap();

        let state = AgentState::from_answer(answer);

        assert_eq!(state.citations, Some(Lenient::Raw(json!("doc1"))));
        assert!(!state.citations_missing());
        assert!(state.citation_list().is_empty());
        assert_eq!(state.relation(), None);
        assert!(state.relation.as_ref().is_some_and(|r| !r.is_typed()));
        assert!(matches!(state.decode_relation(), Err(AgentError::Decode(_))));
        assert_eq!(state.decode_decision::<u32>().unwrap(), 7);
    }

    #[test]
    fn test_decode_relation() {
        assert!(matches!(
            AgentState::new().decode_relation(),
            Err(AgentError::MissingRelation)
        ));

        let state = AgentState::from_answer(AnswerResult::new().with_relation(sample_relation()));
        assert_eq!(state.decode_relation().unwrap(), sample_relation());
    }

    #[test]
    fn test_apply_is_idempotent() {
        let answer = AnswerResult::new().with_citations(["a", "b"]).with_decision("hold");

        let mut once = AgentState::new();
        once.apply(answer.clone());

        let mut twice = AgentState::new();
        twice.apply(answer.clone());
        twice.apply(answer);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_apply_does_not_merge() {
        let mut state = AgentState::new();
        state.apply(
            AnswerResult::new()
                .with_citations(["p1"])
                .with_relation(sample_relation())
                .with_decision("approve"),
        );
        state.apply(AnswerResult::new().with_citations(["p2", "p2b"]));

        assert_eq!(state.citation_list(), ["p2".to_string(), "p2b".to_string()]);
        assert_eq!(state.relation, None);
        assert_eq!(state.decision, None);
    }
}
