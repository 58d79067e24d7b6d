//! Shared exclusivity gate for capture sessions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::CaptureError;

/// Gate shared by every capture adapter: only one capture session (speech
/// or screenshot) may hold a device at a time. Clones share the flag.
#[derive(Clone, Default)]
pub struct CaptureGate {
    held: Arc<AtomicBool>,
}

impl CaptureGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt to take the gate. Fails fast with `AlreadyInProgress` while
    /// a prior capture session still holds it.
    pub(crate) fn acquire(&self) -> Result<GateGuard, CaptureError> {
        if self
            .held
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(CaptureError::AlreadyInProgress);
        }
        Ok(GateGuard {
            held: Arc::clone(&self.held),
        })
    }
}

/// Guard that reopens the gate on drop, so the device slot is never leaked
/// on an error path or a cancelled future.
#[derive(Debug)]
pub(crate) struct GateGuard {
    held: Arc<AtomicBool>,
}

impl Drop for GateGuard {
    fn drop(&mut self) {
        self.held.store(false, Ordering::Release);
    }
}
