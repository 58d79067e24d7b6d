//! One-shot delivery of a decomposed reply to the presentation layer.

use tracing::debug;

use crate::CompletionResponse;

/// Presentation-layer callback: `(script, audio_base64, text)`, invoked
/// once per successful exchange.
pub type CompletionSink = Box<dyn Fn(&str, &str, &str) + Send + Sync>;

/// Invoke the sink exactly once with the three payload fields, in the
/// order script, audio, text.
///
/// Performs no store mutation: which field to persist as the assistant's
/// turn stays the caller's policy decision.
pub fn dispatch(response: &CompletionResponse, sink: &CompletionSink) {
    debug!(
        script_chars = response.speech_part_script.len(),
        audio_chars = response.speech_part_base64.len(),
        text_chars = response.text_part.len(),
        "dispatching completion result"
    );
    sink(
        &response.speech_part_script,
        &response.speech_part_base64,
        &response.text_part,
    );
}
