//! Rendezvous between the computation thread and the render side.
//!
//! Each hand-off delivers one frame, suspends the caller until the renderer
//! acknowledges it, then holds for the display delay. Both waits wake early
//! on cancellation. Nothing is queued: the engine cannot produce the next
//! frame until the previous one has been drawn.

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{select, Receiver};
use tracing::debug;

use crate::engine::SortError;
use crate::observer::{StepEvent, StepSubject};
use crate::options::Pacing;
use crate::progress::CancellationToken;
use crate::renderer::{Acknowledgment, Renderer};
use crate::sequence::NumberSequence;
use crate::step::{RenderFrame, Step};

/// Hands steps to a renderer one at a time and paces them.
pub struct StepSynchronizer {
    renderer: Arc<dyn Renderer>,
    cancel: CancellationToken,
    pacing: Pacing,
    observers: Option<Arc<StepSubject>>,
    run: u64,
    next_seq: u64,
}

impl StepSynchronizer {
    /// Create a synchronizer for one run.
    #[must_use]
    pub fn new(renderer: Arc<dyn Renderer>, cancel: CancellationToken, pacing: Pacing) -> Self {
        Self {
            renderer,
            cancel,
            pacing,
            observers: None,
            run: 0,
            next_seq: 0,
        }
    }

    /// Report acknowledged steps to `observers`, tagged with `run`.
    #[must_use]
    pub fn with_observers(mut self, observers: Arc<StepSubject>, run: u64) -> Self {
        self.observers = Some(observers);
        self.run = run;
        self
    }

    /// The token this synchronizer honours.
    #[must_use]
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Number of frames handed off so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.next_seq
    }

    /// Show `step` with its highlight over the current values.
    pub fn present(&mut self, step: Step, sequence: &NumberSequence) -> Result<(), SortError> {
        let frame = RenderFrame::highlight(self.next_seq, step, sequence.snapshot());
        self.hand_off(frame, self.pacing.step_delay)
    }

    /// Show the current values with no highlight.
    pub fn refresh(&mut self, sequence: &NumberSequence) -> Result<(), SortError> {
        let frame = RenderFrame::refresh(self.next_seq, sequence.snapshot());
        self.hand_off(frame, self.pacing.refresh_delay)
    }

    fn hand_off(&mut self, frame: RenderFrame, delay: Duration) -> Result<(), SortError> {
        self.cancel.check_cancelled()?;

        let seq = frame.seq;
        let step = frame.step;
        self.next_seq += 1;
        debug!(run = self.run, seq, kind = ?frame.kind, "hand-off");

        match self.renderer.render(frame) {
            Acknowledgment::Drawn => {}
            Acknowledgment::Pending(ack) => self.await_ack(&ack)?,
            Acknowledgment::Lost => {
                return Err(SortError::Interrupted("renderer is gone".into()));
            }
        }

        if let (Some(step), Some(observers)) = (step, &self.observers) {
            observers.notify(&StepEvent {
                run: self.run,
                seq,
                step,
            });
        }

        self.hold(delay)
    }

    fn await_ack(&self, ack: &Receiver<()>) -> Result<(), SortError> {
        select! {
            recv(ack) -> msg => msg.map_err(|_| {
                SortError::Interrupted("acknowledgment channel closed".into())
            }),
            recv(self.cancel.signal()) -> _ => Err(SortError::Cancelled),
        }
    }

    fn hold(&self, delay: Duration) -> Result<(), SortError> {
        if delay.is_zero() {
            return self.cancel.check_cancelled();
        }
        select! {
            recv(self.cancel.signal()) -> _ => Err(SortError::Cancelled),
            default(delay) => Ok(()),
        }
    }
}
