//! Session struct and transcript ownership.

use std::sync::atomic::AtomicBool;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::transcript::TranscriptStore;
use crate::{CompletionResponse, Turn};

/// Which payload field becomes the assistant's stored turn, a
/// presentation-layer policy: the transcript may carry the free-text
/// answer or the script read aloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssistantTurnPolicy {
    /// Store `text_part` (the default).
    #[default]
    TextPart,
    /// Store `speech_part_script`.
    Script,
}

impl AssistantTurnPolicy {
    pub(crate) fn content<'a>(&self, response: &'a CompletionResponse) -> &'a str {
        match self {
            Self::TextPart => &response.text_part,
            Self::Script => &response.speech_part_script,
        }
    }
}

/// A conversation session: transcript history plus send serialization.
/// History lives for the session only; nothing is persisted across runs.
pub struct Session {
    pub(super) id: Uuid,
    pub(super) started_at: DateTime<Utc>,
    pub(super) transcript: TranscriptStore,
    pub(super) policy: AssistantTurnPolicy,
    /// Whether a send is currently in flight.
    pub(super) busy: AtomicBool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            transcript: TranscriptStore::new(),
            policy: AssistantTurnPolicy::default(),
            busy: AtomicBool::new(false),
        }
    }

    /// Seed the transcript, e.g. with the assistant greeting turns the
    /// presentation layer shows before the first exchange.
    pub fn with_initial_turns(self, turns: impl IntoIterator<Item = Turn>) -> Self {
        for turn in turns {
            self.transcript.append(turn);
        }
        self
    }

    pub fn with_policy(mut self, policy: AssistantTurnPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The transcript store; presentation reads go through
    /// [`TranscriptStore::snapshot`].
    pub fn transcript(&self) -> &TranscriptStore {
        &self.transcript
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
