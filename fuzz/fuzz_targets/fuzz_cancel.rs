#![no_main]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use libfuzzer_sys::fuzz_target;

use sortanim_core::{
    Acknowledgment, CancellationToken, Direction, EngineOptions, NumberSequence, Pacing,
    RenderFrame, Renderer, SortEngine, StepSynchronizer,
};

/// Cancels once `limit` frames have been drawn.
struct CancelAfter {
    drawn: AtomicUsize,
    limit: usize,
    cancel: CancellationToken,
}

impl Renderer for CancelAfter {
    fn render(&self, _frame: RenderFrame) -> Acknowledgment {
        if self.drawn.fetch_add(1, Ordering::Relaxed) + 1 >= self.limit {
            self.cancel.cancel();
        }
        Acknowledgment::Drawn
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let limit = usize::from(data[0]) + 1;
    let values: Vec<i32> = data[1..].iter().map(|&b| i32::from(b)).collect();

    let cancel = CancellationToken::new();
    let renderer = Arc::new(CancelAfter {
        drawn: AtomicUsize::new(0),
        limit,
        cancel: cancel.clone(),
    });
    let mut sync = StepSynchronizer::new(renderer, cancel, Pacing::instant());
    let mut sequence = NumberSequence::new(values.clone());
    let _ = SortEngine::new(&mut sync, Direction::Descending, EngineOptions::default())
        .run(&mut sequence);

    // Cancelled or not, no value is lost or duplicated.
    assert!(sequence.is_permutation_of(&values));
});
