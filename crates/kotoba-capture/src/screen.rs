//! Still-image capture adapter.
//!
//! One-shot producer: `begin` opens the display via the [`ScreenDevice`]
//! seam, grabs a single frame, stops the stream, and delivers the frame
//! base64-encoded to the supplied callback exactly once.

use std::sync::Mutex;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::debug;

use crate::gate::CaptureGate;
use crate::CaptureError;

/// A captured still image, delivered once per capture session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotResult {
    /// Base64-encoded PNG frame.
    pub image_base64: String,
}

/// Display acquisition seam. `open` may prompt the user to pick a surface.
#[async_trait]
pub trait ScreenDevice: Send + Sync {
    async fn open(&self) -> Result<Box<dyn ScreenStream>, CaptureError>;
}

/// An open display-capture stream.
#[async_trait]
pub trait ScreenStream: Send {
    /// Grab one encoded frame (PNG bytes) from the stream.
    async fn grab_frame(&mut self) -> Result<Vec<u8>, CaptureError>;

    /// Stop every track and release the display.
    fn close(&mut self);
}

/// One-shot screenshot adapter. Holds at most the most recent frame,
/// never a history.
pub struct ScreenCapture {
    gate: CaptureGate,
    latest: Mutex<Option<ScreenshotResult>>,
}

impl ScreenCapture {
    pub fn new(gate: CaptureGate) -> Self {
        Self {
            gate,
            latest: Mutex::new(None),
        }
    }

    /// Run one capture cycle: take the gate, grab a frame, release the
    /// display, deliver the encoded image.
    ///
    /// The stream is closed on every path, frame-grab failure included.
    /// A completed cycle overwrites the previously held image.
    pub async fn begin(
        &self,
        device: &dyn ScreenDevice,
        on_result: impl FnOnce(&ScreenshotResult),
    ) -> Result<(), CaptureError> {
        let _guard = self.gate.acquire()?;

        let mut stream = device.open().await?;
        debug!("screen capture started");

        let outcome = stream.grab_frame().await;
        stream.close();

        let frame = outcome?;
        debug!(bytes = frame.len(), "frame grabbed");

        let result = ScreenshotResult {
            image_base64: STANDARD.encode(frame),
        };
        on_result(&result);
        *self.latest.lock().unwrap() = Some(result);
        Ok(())
    }

    /// The most recent screenshot, if any capture has completed.
    pub fn latest(&self) -> Option<ScreenshotResult> {
        self.latest.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    struct FakeDisplay {
        frame: Mutex<Option<Result<Vec<u8>, CaptureError>>>,
        closed: Arc<AtomicBool>,
    }

    impl FakeDisplay {
        fn showing(frame: &[u8]) -> Self {
            Self {
                frame: Mutex::new(Some(Ok(frame.to_vec()))),
                closed: Arc::new(AtomicBool::new(false)),
            }
        }

        fn failing() -> Self {
            Self {
                frame: Mutex::new(Some(Err(CaptureError::DeviceUnavailable(
                    "no display surface".into(),
                )))),
                closed: Arc::new(AtomicBool::new(false)),
            }
        }
    }

    struct FakeDisplayStream {
        frame: Option<Result<Vec<u8>, CaptureError>>,
        closed: Arc<AtomicBool>,
    }

    #[async_trait]
    impl ScreenDevice for FakeDisplay {
        async fn open(&self) -> Result<Box<dyn ScreenStream>, CaptureError> {
            Ok(Box::new(FakeDisplayStream {
                frame: self.frame.lock().unwrap().take(),
                closed: Arc::clone(&self.closed),
            }))
        }
    }

    #[async_trait]
    impl ScreenStream for FakeDisplayStream {
        async fn grab_frame(&mut self) -> Result<Vec<u8>, CaptureError> {
            self.frame.take().expect("one frame per stream")
        }

        fn close(&mut self) {
            self.closed.store(true, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn delivers_the_encoded_frame_once_and_retains_it() {
        let capture = ScreenCapture::new(CaptureGate::new());
        let device = FakeDisplay::showing(b"fake png bytes");
        let calls = AtomicUsize::new(0);

        capture
            .begin(&device, |result| {
                calls.fetch_add(1, Ordering::SeqCst);
                assert_eq!(result.image_base64, STANDARD.encode(b"fake png bytes"));
            })
            .await
            .expect("capture succeeds");

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            capture.latest().unwrap().image_base64,
            STANDARD.encode(b"fake png bytes")
        );
        assert!(device.closed.load(Ordering::SeqCst), "display released");
    }

    #[tokio::test]
    async fn frame_grab_failure_still_closes_the_stream() {
        let capture = ScreenCapture::new(CaptureGate::new());
        let device = FakeDisplay::failing();

        let err = capture
            .begin(&device, |_| panic!("no delivery on failure"))
            .await
            .expect_err("frame grab fails");
        assert!(matches!(err, CaptureError::DeviceUnavailable(_)));
        assert!(device.closed.load(Ordering::SeqCst), "display released");
        assert!(capture.latest().is_none());
    }

    #[tokio::test]
    async fn a_new_cycle_overwrites_the_previous_frame() {
        let capture = ScreenCapture::new(CaptureGate::new());

        capture
            .begin(&FakeDisplay::showing(b"first"), |_| {})
            .await
            .expect("first capture succeeds");
        capture
            .begin(&FakeDisplay::showing(b"second"), |_| {})
            .await
            .expect("second capture succeeds");

        assert_eq!(
            capture.latest().unwrap().image_base64,
            STANDARD.encode(b"second")
        );
    }

    #[tokio::test]
    async fn speech_and_screen_share_one_device_slot() {
        let gate = CaptureGate::new();
        let screen = ScreenCapture::new(gate.clone());
        let _guard = gate.acquire().expect("simulate a speech session holding the device");

        let err = screen
            .begin(&FakeDisplay::showing(b"frame"), |_| {})
            .await
            .expect_err("device is held by another session");
        assert!(matches!(err, CaptureError::AlreadyInProgress));
    }
}
