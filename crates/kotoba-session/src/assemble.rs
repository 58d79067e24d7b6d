//! Trailing-window request assembly.
//!
//! Bounds the transcript to the most recent [`MAX_MESSAGE_LENGTH`] entries,
//! drops malformed records, and maps the survivors to the wire shape.

use crate::{CompletionRequest, Turn, TurnRecord};

/// How many trailing turns (pending utterance included) an outgoing
/// request may carry.
pub const MAX_MESSAGE_LENGTH: usize = 10;

/// Build the wire request for one send.
///
/// The pending utterance is the not-yet-stored turn that triggered this
/// request; it is layered on top of the transcript snapshot synthetically
/// and only persisted after the exchange succeeds. Windowing happens
/// strictly before shape filtering: a malformed record inside the trailing
/// window consumes one of its slots instead of being backfilled from older
/// history. This is a compatibility property, not an accident.
pub fn assemble(
    transcript: &[TurnRecord],
    pending_user_text: &str,
    image: Option<String>,
    max_tokens: u32,
) -> CompletionRequest {
    let mut combined: Vec<TurnRecord> = transcript.to_vec();
    if !pending_user_text.is_empty() {
        combined.push(Turn::user(pending_user_text).into());
    }

    let start = combined.len().saturating_sub(MAX_MESSAGE_LENGTH);
    let input_messages = combined[start..]
        .iter()
        .filter_map(TurnRecord::as_input_message)
        .collect();

    CompletionRequest {
        input_messages,
        base64_image: image,
        max_tokens,
    }
}
