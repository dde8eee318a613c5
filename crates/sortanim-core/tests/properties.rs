//! Property-based tests for the step-emitting quicksort.
//!
//! These tests drive `SortEngine` through a recording renderer with no
//! display delay.

use std::sync::Arc;

use parking_lot::Mutex;
use proptest::prelude::*;

use sortanim_core::{
    select_pivot_index, Acknowledgment, CancellationToken, Direction, EngineOptions,
    NumberSequence, Pacing, RenderFrame, Renderer, SortEngine, SortError, Step, StepSynchronizer,
};

/// Records frames and cancels after `limit` of them, if set.
struct Recorder {
    frames: Mutex<Vec<RenderFrame>>,
    cancel_after: Option<(usize, CancellationToken)>,
}

impl Renderer for Recorder {
    fn render(&self, frame: RenderFrame) -> Acknowledgment {
        let mut frames = self.frames.lock();
        frames.push(frame);
        if let Some((limit, token)) = &self.cancel_after {
            if frames.len() >= *limit {
                token.cancel();
            }
        }
        Acknowledgment::Drawn
    }
}

fn run(
    values: &[i32],
    direction: Direction,
    cancel_after: Option<usize>,
) -> (NumberSequence, Vec<RenderFrame>, Result<(), SortError>) {
    let cancel = CancellationToken::new();
    let recorder = Arc::new(Recorder {
        frames: Mutex::new(Vec::new()),
        cancel_after: cancel_after.map(|n| (n, cancel.clone())),
    });
    let mut sync = StepSynchronizer::new(recorder.clone(), cancel, Pacing::instant());
    let mut sequence = NumberSequence::new(values.to_vec());
    let result = SortEngine::new(&mut sync, direction, EngineOptions::default()).run(&mut sequence);
    let frames = recorder.frames.lock().clone();
    (sequence, frames, result)
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Ascending), Just(Direction::Descending)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// An uncancelled run leaves the values sorted in the run's direction.
    #[test]
    fn completed_run_is_sorted(
        values in prop::collection::vec(1i32..=1000, 0..60),
        direction in direction_strategy(),
    ) {
        let (sequence, _, result) = run(&values, direction, None);
        prop_assert!(result.is_ok());
        prop_assert!(sequence.is_sorted(direction));
        prop_assert!(sequence.is_permutation_of(&values));
    }

    /// The last frame of a completed run is `Done` in the run's direction.
    #[test]
    fn completed_run_ends_with_done(
        values in prop::collection::vec(-50i32..50, 0..30),
        direction in direction_strategy(),
    ) {
        let (_, frames, _) = run(&values, direction, None);
        let last = frames.last().and_then(|f| f.step);
        prop_assert_eq!(last, Some(Step::Done { order: direction }));
    }

    /// Applying each `Swapped` step to the values it was shown over yields
    /// the values of the following frame.
    #[test]
    fn swap_frames_precede_their_exchange(
        values in prop::collection::vec(0i32..20, 2..30),
        direction in direction_strategy(),
    ) {
        let (_, frames, _) = run(&values, direction, None);
        for pair in frames.windows(2) {
            if let Some(Step::Swapped { i, j }) = pair[0].step {
                prop_assert_ne!(i, j);
                let mut expected = pair[0].values.clone();
                expected.swap(i, j);
                prop_assert_eq!(&pair[1].values, &expected);
            }
        }
    }

    /// Cancelling after any number of frames leaves a permutation and no
    /// frames beyond the one that triggered the cancel.
    #[test]
    fn cancellation_preserves_values(
        values in prop::collection::vec(1i32..=1000, 2..50),
        limit in 1usize..40,
        direction in direction_strategy(),
    ) {
        let (full_seq, full_frames, _) = run(&values, direction, None);
        let (sequence, frames, result) = run(&values, direction, Some(limit));
        prop_assert!(sequence.is_permutation_of(&values));
        if limit < full_frames.len() {
            prop_assert_eq!(result, Err(SortError::Cancelled));
            prop_assert_eq!(frames.len(), limit);
            // The frames that were shown are exactly a prefix of the full run.
            prop_assert_eq!(&frames[..], &full_frames[..limit]);
        } else {
            prop_assert!(sequence == full_seq || result.is_err());
        }
    }

    /// The pivot is always the median of the three sampled values.
    #[test]
    fn pivot_is_median(values in prop::collection::vec(-100i32..100, 1..40), a in 0usize..40, b in 0usize..40) {
        let len = values.len();
        let (low, high) = {
            let (x, y) = (a % len, b % len);
            if x <= y { (x, y) } else { (y, x) }
        };
        let sequence = NumberSequence::new(values.clone());
        let mid = low + (high - low) / 2;
        let picked = select_pivot_index(&sequence, low, high);
        prop_assert!(picked == low || picked == mid || picked == high);

        let mut sample = [values[low], values[mid], values[high]];
        sample.sort_unstable();
        prop_assert_eq!(values[picked], sample[1]);
        prop_assert_eq!(picked, select_pivot_index(&sequence, low, high));
    }
}

#[test]
fn pivot_example_from_three_values() {
    let sequence = NumberSequence::new(vec![10, 50, 30]);
    assert_eq!(select_pivot_index(&sequence, 0, 2), 2);
}
