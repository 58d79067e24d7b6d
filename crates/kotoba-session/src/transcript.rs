//! Append-only transcript store.

use std::sync::Mutex;

use crate::{Turn, TurnRecord};

/// Ordered log of turns, oldest first. The store only grows for the
/// lifetime of the session; only the outgoing request is bounded, so the
/// presentation layer may render the full history. Appends from the speech
/// path and the dispatcher path are serialized; `snapshot` hands out an
/// independent copy.
#[derive(Debug, Default)]
pub struct TranscriptStore {
    records: Mutex<Vec<TurnRecord>>,
}

impl TranscriptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a well-formed turn at the tail.
    pub fn append(&self, turn: Turn) {
        self.records.lock().unwrap().push(turn.into());
    }

    /// Append a raw record as the presentation layer stores it. The store
    /// accepts malformed arities (e.g. a placeholder not yet populated);
    /// the assembler filters them at send time.
    pub fn append_record(&self, record: TurnRecord) {
        self.records.lock().unwrap().push(record);
    }

    /// An ordered copy of the full history.
    pub fn snapshot(&self) -> Vec<TurnRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_preserve_insertion_order() {
        let store = TranscriptStore::new();
        store.append(Turn::assistant("hello"));
        store.append(Turn::user("hi"));
        store.append(Turn::assistant("any questions?"));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[0].fields(), ["assistant", "hello"]);
        assert_eq!(snapshot[1].fields(), ["user", "hi"]);
        assert_eq!(snapshot[2].fields(), ["assistant", "any questions?"]);
    }

    #[test]
    fn snapshot_is_an_independent_copy() {
        let store = TranscriptStore::new();
        store.append(Turn::user("hi"));

        let snapshot = store.snapshot();
        store.append(Turn::assistant("hello"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn malformed_records_are_retained_by_the_store() {
        let store = TranscriptStore::new();
        store.append_record(TurnRecord(vec!["user".into()]));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot[0].as_input_message().is_none());
    }
}
