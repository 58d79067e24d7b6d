//! Conversational session core for kotoba.
//!
//! Assembles a bounded chat transcript, an optional captured image, and a
//! token budget into a single request to the remote completion service,
//! then routes the structured reply (spoken-audio payload, the script read
//! aloud, and a free-text answer) back to the presentation layer:
//! - Append-only transcript store with snapshot reads
//! - Trailing-window request assembly with shape filtering
//! - HTTP completion client (single POST, no retries)
//! - One-shot response dispatch to a presentation sink
//! - Send serialization (a second send while one is in flight is rejected)

pub mod assemble;
pub mod completion;
pub mod dispatch;
pub mod session;
pub mod transcript;

use async_trait::async_trait;

pub use assemble::{assemble, MAX_MESSAGE_LENGTH};
pub use completion::{CompletionConfig, HttpCompletionClient};
pub use dispatch::{dispatch, CompletionSink};
pub use session::{AssistantTurnPolicy, Session, SessionError};
pub use transcript::TranscriptStore;

/// Role tag for the human side of the conversation.
pub const ROLE_USER: &str = "user";
/// Role tag for the answering side. Any other string is a valid custom
/// role; there is no closed role enum.
pub const ROLE_ASSISTANT: &str = "assistant";

/// One exchange with the completion service.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn submit(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError>;
}

/// A single role-tagged utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: String,
    pub content: String,
}

impl Turn {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ROLE_USER, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ROLE_ASSISTANT, content)
    }
}

/// The stored shape of a turn: an ordered list of string fields, serialized
/// as a bare JSON array. A well-formed record is exactly `[role, content]`;
/// any other arity is malformed and is dropped by the assembler at send
/// time, never by the store.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TurnRecord(pub Vec<String>);

impl TurnRecord {
    pub fn fields(&self) -> &[String] {
        &self.0
    }

    /// The `{role, content}` wire shape, if the record is well-formed.
    pub fn as_input_message(&self) -> Option<InputMessage> {
        match self.0.as_slice() {
            [role, content] => Some(InputMessage {
                role: role.clone(),
                content: content.clone(),
            }),
            _ => None,
        }
    }
}

impl From<Turn> for TurnRecord {
    fn from(turn: Turn) -> Self {
        Self(vec![turn.role, turn.content])
    }
}

/// One `{role, content}` entry of the outgoing request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InputMessage {
    pub role: String,
    pub content: String,
}

/// JSON body POSTed to the completion service. `base64_image` serializes
/// as `null` when no screenshot has been captured.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CompletionRequest {
    pub input_messages: Vec<InputMessage>,
    pub base64_image: Option<String>,
    pub max_tokens: u32,
}

/// Decomposed reply from the completion service. All three fields are
/// required on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    /// The script the spoken audio reads aloud.
    pub speech_part_script: String,
    /// Base64-encoded spoken-audio payload.
    pub speech_part_base64: String,
    /// Free-text answer for the chat display.
    pub text_part: String,
}

/// Completion exchange failures. Every failure aborts the current send
/// without touching the transcript store; retries are always a fresh,
/// user-triggered send.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// Non-2xx status from the service; the body is ignored.
    #[error("service rejected request: HTTP {0}")]
    ServiceRejected(u16),

    /// A 2xx body that is not the expected three-field envelope.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// DNS failure, connection reset, or any other network-level fault.
    #[error("transport failure: {0}")]
    TransportFailure(String),

    /// A configured timeout expired. Never produced unless a timeout was
    /// opted into via [`CompletionConfig`].
    #[error("timeout")]
    Timeout,
}
