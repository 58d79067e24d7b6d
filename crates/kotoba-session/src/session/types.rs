//! Session errors and concurrency guards.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::CompletionError;

/// Failures of a send attempt. Completion failures leave the transcript
/// store untouched, so the user can simply send again.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A send is already in flight; this one was rejected, not queued.
    #[error("session is busy with another request")]
    Busy,

    #[error(transparent)]
    Completion(#[from] CompletionError),
}

/// Guard that clears the `busy` flag on drop, ensuring it is always
/// released even if the future is cancelled or an early return occurs.
pub(crate) struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    /// Attempt to acquire the busy lock. Returns `Err` if already busy.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Result<Self, SessionError> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(SessionError::Busy);
        }
        Ok(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
