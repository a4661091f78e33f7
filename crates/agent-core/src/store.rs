//! Agent State Store
//!
//! Single writer, many observers. The writer is an owned `AgentStore`
//! handle passed to whichever component applies chat answers; readers hold
//! `StateObserver`s and never see a half-applied update.

use tokio::sync::watch;

use crate::answer::AnswerResult;
use crate::state::AgentState;

/// Owner of the agent state. Not `Clone`: there is exactly one writer.
#[derive(Debug)]
pub struct AgentStore {
    tx: watch::Sender<AgentState>,
    revision: u64,
}

impl Default for AgentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentStore {
    /// Create a store holding the initial state
    pub fn new() -> Self {
        Self::with_state(AgentState::default())
    }

    /// Create a store seeded with `state`
    pub fn with_state(state: AgentState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self { tx, revision: 0 }
    }

    /// Replace the whole state with the one derived from `result`.
    ///
    /// Never fails. Observers see the previous state or the new one,
    /// nothing in between.
    pub fn update_from_answer_result(&mut self, result: AnswerResult) {
        if result.citations.is_none() {
            tracing::warn!("answer carried no citations; leaving citations unset");
        }
        if result.has_raw_fields() {
            tracing::warn!("answer fields of unexpected shape stored as received");
        }

        let next = AgentState::from_answer(result);
        self.tx.send_replace(next);
        self.revision += 1;

        tracing::debug!(revision = self.revision, "agent state updated");
    }

    /// Clone of the current state
    pub fn snapshot(&self) -> AgentState {
        self.tx.borrow().clone()
    }

    /// Number of updates applied so far
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Register a new read-only observer
    pub fn subscribe(&self) -> StateObserver {
        StateObserver {
            rx: self.tx.subscribe(),
        }
    }

    /// Number of live observers
    pub fn observer_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Read-only view of an `AgentStore`.
#[derive(Clone, Debug)]
pub struct StateObserver {
    rx: watch::Receiver<AgentState>,
}

impl StateObserver {
    /// Clone of the current state
    pub fn current(&self) -> AgentState {
        self.rx.borrow().clone()
    }

    /// Wait for the next update and return the state it produced.
    ///
    /// Returns `None` once the store has been dropped.
    pub async fn changed(&mut self) -> Option<AgentState> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    /// Whether an update landed since this observer last looked
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::Decision;
    use crate::relation::ExtractedRelation;

    fn payload(tag: &str) -> AnswerResult {
        AnswerResult::new()
            .with_citations([format!("doc-{tag}")])
            .with_relation(ExtractedRelation::new(format!("s-{tag}"), "causes", "o"))
            .with_decision(tag)
    }

    #[test]
    fn test_initial_snapshot() {
        let store = AgentStore::new();
        assert_eq!(store.snapshot(), AgentState::default());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_update_overwrites_all_fields() {
        let mut store = AgentStore::new();
        store.update_from_answer_result(payload("p1"));

        let state = store.snapshot();
        assert_eq!(state.citation_list(), ["doc-p1".to_string()]);
        assert_eq!(state.relation().unwrap().subject_id, "s-p1");
        assert_eq!(state.decision, Some(Decision::from("p1")));
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_update_with_empty_payload() {
        let mut store = AgentStore::new();
        store.update_from_answer_result(payload("p1"));
        store.update_from_answer_result(AnswerResult::new());

        let state = store.snapshot();
        assert_eq!(state.citations, None);
        assert_eq!(state.relation, None);
        assert_eq!(state.decision, None);
    }

    #[test]
    fn test_update_keeps_unexpected_shapes() {
        let answer: AnswerResult = serde_json::from_value(serde_json::json!({
            "citations": [1, 2],
            "relation": { "subjectId": "s1" }
        }))
        .unwrap();

        let mut store = AgentStore::new();
        store.update_from_answer_result(answer.clone());

        let state = store.snapshot();
        assert_eq!(state.citations, answer.citations);
        assert_eq!(state.relation, answer.relation);
        assert_eq!(state.decision, None);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = AgentStore::new();
        store.update_from_answer_result(payload("p1"));
        store.update_from_answer_result(payload("p2"));

        assert_eq!(store.snapshot(), AgentState::from_answer(payload("p2")));
    }

    #[test]
    fn test_idempotent_update() {
        let mut once = AgentStore::new();
        once.update_from_answer_result(payload("p1"));

        let mut twice = AgentStore::new();
        twice.update_from_answer_result(payload("p1"));
        twice.update_from_answer_result(payload("p1"));

        assert_eq!(once.snapshot(), twice.snapshot());
    }

    #[tokio::test]
    async fn test_observer_sees_update() {
        let mut store = AgentStore::new();
        let mut observer = store.subscribe();
        assert_eq!(store.observer_count(), 1);
        assert!(!observer.has_changed());

        let waiter = tokio::spawn(async move { observer.changed().await });
        store.update_from_answer_result(payload("p1"));

        let seen = waiter.await.unwrap().unwrap();
        assert_eq!(seen.decision, Some(Decision::from("p1")));
    }

    #[tokio::test]
    async fn test_observer_ends_when_store_dropped() {
        let store = AgentStore::new();
        let mut observer = store.subscribe();
        drop(store);

        assert!(observer.changed().await.is_none());
        assert_eq!(observer.current(), AgentState::default());
    }
}
