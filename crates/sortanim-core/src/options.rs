//! Animation pacing and engine options.

use std::time::Duration;

use crate::constants::{DEFAULT_STEP_DELAY, MAX_STEP_DELAY};

/// Display delays applied after each acknowledged frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Hold time after a highlight frame.
    pub step_delay: Duration,
    /// Hold time after a refresh frame.
    pub refresh_delay: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self::from_step_delay(DEFAULT_STEP_DELAY)
    }
}

impl Pacing {
    /// Pacing with the given highlight delay and half of it for refreshes.
    #[must_use]
    pub fn from_step_delay(step_delay: Duration) -> Self {
        Self {
            step_delay,
            refresh_delay: step_delay / 2,
        }
    }

    /// Pacing with no delay at all, for tests and benchmarks.
    #[must_use]
    pub fn instant() -> Self {
        Self::from_step_delay(Duration::ZERO)
    }

    /// Clamp delays to `MAX_STEP_DELAY`; a refresh never outlasts a step.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        self.step_delay = self.step_delay.min(MAX_STEP_DELAY);
        self.refresh_delay = self.refresh_delay.min(self.step_delay);
        self
    }
}

/// Options controlling which frames the engine emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Emit a `Compared` step before each comparison against the pivot.
    pub show_comparisons: bool,
    /// Emit a refresh frame after each exchange.
    pub refresh_after_swap: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            show_comparisons: false,
            refresh_after_swap: true,
        }
    }
}

impl EngineOptions {
    /// Only highlight frames: no comparisons, no refreshes.
    #[must_use]
    pub fn steps_only() -> Self {
        Self {
            show_comparisons: false,
            refresh_after_swap: false,
        }
    }
}
