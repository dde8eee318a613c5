//! Shared helpers for the workspace integration tests.

use std::sync::Arc;

use parking_lot::Mutex;

use sortanim_core::{
    Acknowledgment, CancellationToken, Direction, EngineOptions, NumberSequence, Pacing,
    RenderFrame, Renderer, SortEngine, SortError, Step, StepSynchronizer,
};

/// Acknowledges every frame immediately and keeps a copy.
#[derive(Default)]
pub struct RecordingRenderer {
    frames: Mutex<Vec<RenderFrame>>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames drawn so far.
    pub fn frames(&self) -> Vec<RenderFrame> {
        self.frames.lock().clone()
    }

    /// The steps of the highlight frames, in order.
    pub fn steps(&self) -> Vec<Step> {
        self.frames.lock().iter().filter_map(|f| f.step).collect()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, frame: RenderFrame) -> Acknowledgment {
        self.frames.lock().push(frame);
        Acknowledgment::Drawn
    }
}

/// Result of one undelayed engine run.
pub struct SortTrace {
    pub values: Vec<i32>,
    pub frames: Vec<RenderFrame>,
    pub steps: Vec<Step>,
    pub result: Result<(), SortError>,
}

/// Sort `values` through a fresh synchronizer and record every frame.
pub fn trace_sort(values: &[i32], direction: Direction, options: EngineOptions) -> SortTrace {
    let renderer = Arc::new(RecordingRenderer::new());
    let mut sync = StepSynchronizer::new(
        renderer.clone(),
        CancellationToken::new(),
        Pacing::instant(),
    );
    let mut sequence = NumberSequence::new(values.to_vec());
    let result = SortEngine::new(&mut sync, direction, options).run(&mut sequence);
    SortTrace {
        values: sequence.snapshot(),
        frames: renderer.frames(),
        steps: renderer.steps(),
        result,
    }
}
