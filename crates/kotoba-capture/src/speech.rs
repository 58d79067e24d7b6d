//! Speech-transcript capture adapter.
//!
//! One-shot producer: `begin` opens the microphone via the [`SpeechDevice`]
//! seam, waits for the speaker to finish one utterance, releases the
//! stream, and hands the transcript to the supplied callback exactly once.

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::gate::CaptureGate;
use crate::CaptureError;

/// A finished speech transcription, delivered once per recording session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechResult {
    pub text: String,
}

/// Microphone acquisition seam. `open` may prompt the user for permission.
#[async_trait]
pub trait SpeechDevice: Send + Sync {
    async fn open(&self) -> Result<Box<dyn SpeechStream>, CaptureError>;
}

/// An open microphone stream with speech recognition running.
#[async_trait]
pub trait SpeechStream: Send {
    /// Resolves when the speaker finishes one utterance.
    async fn next_utterance(&mut self) -> Result<String, CaptureError>;

    /// Stop recognition and release the microphone.
    fn close(&mut self);
}

/// One-shot speech capture adapter. Holds at most the most recent
/// transcript, never a history.
pub struct SpeechCapture {
    gate: CaptureGate,
    latest: Mutex<Option<SpeechResult>>,
}

impl SpeechCapture {
    pub fn new(gate: CaptureGate) -> Self {
        Self {
            gate,
            latest: Mutex::new(None),
        }
    }

    /// Run one capture cycle: take the gate, record one utterance, release
    /// the microphone, deliver the result.
    ///
    /// The stream is closed on every path, recognition failure included.
    /// A completed cycle overwrites the previously held transcript.
    pub async fn begin(
        &self,
        device: &dyn SpeechDevice,
        on_result: impl FnOnce(&SpeechResult),
    ) -> Result<(), CaptureError> {
        let _guard = self.gate.acquire()?;

        let mut stream = device.open().await?;
        debug!("speech capture started");

        let outcome = stream.next_utterance().await;
        stream.close();

        let text = outcome?;
        debug!(chars = text.len(), "speech capture finished");

        let result = SpeechResult { text };
        on_result(&result);
        *self.latest.lock().unwrap() = Some(result);
        Ok(())
    }

    /// The most recent transcript, if any capture has completed.
    pub fn latest(&self) -> Option<SpeechResult> {
        self.latest.lock().unwrap().clone()
    }
}
