//! Capture adapters for kotoba.
//!
//! Wraps the two one-shot media acquisition flows (a speech-transcript
//! source and a still-image source) behind device traits with:
//! - A shared capture gate (one active capture session at a time)
//! - One-shot callback delivery (exactly once per completed cycle)
//! - Unconditional device release on every exit path
//! - "Most recent value" retention, overwritten by the next capture

mod gate;
pub mod screen;
pub mod speech;

pub use gate::CaptureGate;
pub use screen::{ScreenCapture, ScreenDevice, ScreenStream, ScreenshotResult};
pub use speech::{SpeechCapture, SpeechDevice, SpeechResult, SpeechStream};

/// Errors from a capture attempt. Terminal for that attempt only: the
/// device is released and a fresh `begin` may be issued immediately.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("capture permission denied")]
    PermissionDenied,

    #[error("capture device unavailable: {0}")]
    DeviceUnavailable(String),

    #[error("a capture session is already in progress")]
    AlreadyInProgress,
}
