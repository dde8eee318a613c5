//! Concrete observer implementations.

use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_channel::Sender;
use tracing::{debug, info, trace};

use crate::observer::{StepEvent, StepObserver};
use crate::step::Step;

/// Observer that forwards events through a channel (non-blocking).
pub struct ChannelObserver {
    sender: Sender<StepEvent>,
}

impl ChannelObserver {
    /// Create a new channel observer.
    #[must_use]
    pub fn new(sender: Sender<StepEvent>) -> Self {
        Self { sender }
    }
}

impl StepObserver for ChannelObserver {
    fn on_step(&self, event: &StepEvent) {
        // A full or closed channel drops the event; the run must not stall on it.
        let _ = self.sender.try_send(*event);
    }
}

/// Observer that logs steps through `tracing`.
///
/// Swaps are logged at `debug`, every other step at `trace`, and
/// completion at `info`.
pub struct LoggingObserver {
    swaps: AtomicU64,
}

impl LoggingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self {
            swaps: AtomicU64::new(0),
        }
    }

    /// Number of swap steps seen so far.
    #[must_use]
    pub fn swaps(&self) -> u64 {
        self.swaps.load(Ordering::Relaxed)
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl StepObserver for LoggingObserver {
    fn on_step(&self, event: &StepEvent) {
        match event.step {
            Step::Swapped { i, j } => {
                let total = self.swaps.fetch_add(1, Ordering::Relaxed) + 1;
                debug!(run = event.run, seq = event.seq, i, j, total, "swap");
            }
            Step::Done { order } => {
                info!(
                    run = event.run,
                    %order,
                    swaps = self.swaps.load(Ordering::Relaxed),
                    "Sort complete"
                );
            }
            step => {
                trace!(run = event.run, seq = event.seq, step = %step, "step");
            }
        }
    }
}
