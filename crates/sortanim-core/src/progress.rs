//! Cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};
use parking_lot::Mutex;

use crate::engine::SortError;

/// Cooperative cancellation token for one sort run.
///
/// Besides the flag polled at checkpoints, the token carries a signal
/// channel that disconnects on `cancel()`, so blocking waits can `select!`
/// on it and wake immediately.
///
/// # Example
/// ```
/// use sortanim_core::progress::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(!token.is_cancelled());
///
/// token.cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check_cancelled().is_err());
/// ```
#[derive(Clone)]
pub struct CancellationToken {
    inner: Arc<TokenInner>,
}

struct TokenInner {
    cancelled: AtomicBool,
    trigger: Mutex<Option<Sender<()>>>,
    signal: Receiver<()>,
}

impl CancellationToken {
    /// Create a new cancellation token.
    #[must_use]
    pub fn new() -> Self {
        let (trigger, signal) = crossbeam_channel::bounded(0);
        Self {
            inner: Arc::new(TokenInner {
                cancelled: AtomicBool::new(false),
                trigger: Mutex::new(Some(trigger)),
                signal,
            }),
        }
    }

    /// Check if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }

    /// Request cancellation. Calling it again has no further effect.
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::Release);
        // Dropping the sender disconnects `signal`, waking every waiter.
        self.inner.trigger.lock().take();
    }

    /// Receiver that becomes ready (disconnected) once cancelled.
    #[must_use]
    pub fn signal(&self) -> &Receiver<()> {
        &self.inner.signal
    }

    /// Check for cancellation, returning an error if cancelled.
    ///
    /// ```
    /// use sortanim_core::progress::CancellationToken;
    ///
    /// let token = CancellationToken::new();
    /// assert!(token.check_cancelled().is_ok());
    ///
    /// token.cancel();
    /// assert!(token.check_cancelled().is_err());
    /// ```
    pub fn check_cancelled(&self) -> Result<(), SortError> {
        if self.is_cancelled() {
            Err(SortError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CancellationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancellationToken")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
