//! The step-emitting quicksort.
//!
//! Lomuto partitioning around a median-of-three pivot, recursing left range
//! first. Every exchange is announced through the synchronizer before it is
//! applied, so a renderer always shows the highlighted pair in its
//! pre-swap state. Cancellation unwinds through `?` from whichever
//! checkpoint observed it; no exchange is ever half-applied.

use tracing::{debug, info};

use crate::options::EngineOptions;
use crate::pivot::select_pivot_index;
use crate::sequence::NumberSequence;
use crate::step::{Direction, Step};
use crate::synchronizer::StepSynchronizer;

/// Error type for sort runs and session control.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// The run was cancelled at a checkpoint.
    #[error("sort cancelled")]
    Cancelled,

    /// A render hand-off was interrupted for a reason other than cancellation.
    #[error("render hand-off interrupted: {0}")]
    Interrupted(String),

    /// A run is already active.
    #[error("a sort run is already active")]
    RunActive,

    /// No sequence has been loaded into the session.
    #[error("no sequence loaded")]
    NoSequence,

    /// Requested element count is not positive.
    #[error("invalid count {0}: must be positive")]
    InvalidCount(i64),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl SortError {
    /// Whether this error ends a run as `Cancelled` rather than failing it.
    #[must_use]
    pub fn is_halt(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Interrupted(_))
    }
}

/// Quicksort over a `NumberSequence` that reports every step.
pub struct SortEngine<'s> {
    sync: &'s mut StepSynchronizer,
    direction: Direction,
    options: EngineOptions,
}

impl<'s> SortEngine<'s> {
    #[must_use]
    pub fn new(sync: &'s mut StepSynchronizer, direction: Direction, options: EngineOptions) -> Self {
        Self {
            sync,
            direction,
            options,
        }
    }

    /// Sort the whole sequence in place, then emit `Done`.
    ///
    /// Returns `Err` with a halt error if the run was cancelled or a hand-off
    /// was interrupted; the sequence is then left as the last completed
    /// exchange left it.
    pub fn run(&mut self, sequence: &mut NumberSequence) -> Result<(), SortError> {
        info!(len = sequence.len(), direction = %self.direction, "Sort started");
        if !sequence.is_empty() {
            self.sort_range(sequence, 0, sequence.len() - 1)?;
        }
        self.sync.present(
            Step::Done {
                order: self.direction,
            },
            sequence,
        )
    }

    fn sort_range(
        &mut self,
        sequence: &mut NumberSequence,
        low: usize,
        high: usize,
    ) -> Result<(), SortError> {
        if low >= high {
            return Ok(());
        }
        self.sync.cancellation().check_cancelled()?;

        let p = self.partition(sequence, low, high)?;
        if p > low {
            self.sort_range(sequence, low, p - 1)?;
        }
        self.sort_range(sequence, p + 1, high)
    }

    /// Partition `[low, high]` and return the pivot's final index.
    fn partition(
        &mut self,
        sequence: &mut NumberSequence,
        low: usize,
        high: usize,
    ) -> Result<usize, SortError> {
        let pivot_index = select_pivot_index(sequence, low, high);
        debug!(low, high, pivot_index, "partition");
        self.sync
            .present(Step::PivotChosen { index: pivot_index }, sequence)?;
        self.exchange(sequence, pivot_index, high)?;

        let pivot = sequence.get(high);
        // First slot right of the boundary.
        let mut store = low;
        for j in low..high {
            if self.options.show_comparisons {
                self.sync.present(Step::Compared { i: j, j: high }, sequence)?;
            }
            if self.direction.precedes(sequence.get(j), pivot) {
                self.exchange(sequence, store, j)?;
                store += 1;
            }
        }
        self.exchange(sequence, store, high)?;
        Ok(store)
    }

    /// Announce, then apply, an exchange. `i == j` emits nothing.
    fn exchange(
        &mut self,
        sequence: &mut NumberSequence,
        i: usize,
        j: usize,
    ) -> Result<(), SortError> {
        if i == j {
            return Ok(());
        }
        self.sync.present(Step::Swapped { i, j }, sequence)?;
        sequence.swap(i, j);
        if self.options.refresh_after_swap {
            self.sync.refresh(sequence)?;
        }
        Ok(())
    }
}
