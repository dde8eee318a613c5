//! # sortanim-core
//!
//! Core library for the SortAnim quicksort visualizer.
//! Implements the step-emitting quicksort, the renderer rendezvous, and
//! cooperative cancellation.

pub mod constants;
pub mod engine;
pub mod generator;
pub mod observer;
pub mod observers;
pub mod options;
pub mod pivot;
pub mod progress;
pub mod renderer;
pub mod sequence;
pub mod step;
pub mod synchronizer;

// Re-exports
pub use constants::{exit_codes, DEFAULT_STEP_DELAY, MAX_VALUE, MIN_VALUE, SMALL_VALUE_MAX};
pub use engine::{SortEngine, SortError};
pub use observer::{StepEvent, StepObserver, StepSubject};
pub use options::{EngineOptions, Pacing};
pub use pivot::select_pivot_index;
pub use progress::CancellationToken;
pub use renderer::{Acknowledgment, NullRenderer, Renderer};
pub use sequence::NumberSequence;
pub use step::{Direction, FrameKind, Highlight, RenderFrame, RunOutcome, Step};
pub use synchronizer::StepSynchronizer;

use std::sync::Arc;

/// Sort `values` in `direction` with no rendering and no delay.
///
/// This is a convenience for simple use cases; animated runs go through
/// `AnimationSession` in the orchestration crate.
///
/// # Example
/// ```
/// use sortanim_core::{sort_instant, Direction};
///
/// assert_eq!(sort_instant(vec![42, 7, 15, 500, 3], Direction::Descending), vec![500, 42, 15, 7, 3]);
/// ```
#[must_use]
pub fn sort_instant(values: Vec<i32>, direction: Direction) -> Vec<i32> {
    let mut sequence = NumberSequence::new(values);
    let mut sync = StepSynchronizer::new(
        Arc::new(NullRenderer),
        CancellationToken::new(),
        Pacing::instant(),
    );
    SortEngine::new(&mut sync, direction, EngineOptions::steps_only())
        .run(&mut sequence)
        .expect("a fresh token is never cancelled and the null renderer never drops frames");
    sequence.as_slice().to_vec()
}
