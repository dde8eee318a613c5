//! Bridge between the sort session and TUI messages.

use crossbeam_channel::Sender;

use sortanim_core::{Acknowledgment, RenderFrame, Renderer, RunOutcome};
use sortanim_orchestration::interfaces::{OutcomePresenter, RunReport};

use crate::messages::TuiMessage;

/// Renderer that hands frames to the TUI event loop.
///
/// Each frame carries a one-shot acknowledgment channel that the loop
/// signals after the terminal draw showing it.
pub struct TuiRenderer {
    tx: Sender<TuiMessage>,
}

impl TuiRenderer {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self { tx }
    }
}

impl Renderer for TuiRenderer {
    fn render(&self, frame: RenderFrame) -> Acknowledgment {
        let (ack, drawn) = crossbeam_channel::bounded(1);
        match self.tx.send(TuiMessage::Frame { frame, ack }) {
            Ok(()) => Acknowledgment::Pending(drawn),
            Err(_) => Acknowledgment::Lost,
        }
    }
}

/// Outcome callback that forwards run outcomes to the TUI.
pub fn outcome_forwarder(tx: Sender<TuiMessage>) -> impl Fn(RunOutcome) + Send + Sync + 'static {
    move |outcome| {
        let _ = tx.send(TuiMessage::Outcome(outcome));
    }
}

/// TUI run presenter: reports go to the log panel.
pub struct TuiOutcomePresenter {
    tx: Sender<TuiMessage>,
}

impl TuiOutcomePresenter {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self { tx }
    }
}

impl OutcomePresenter for TuiOutcomePresenter {
    fn present_run(&self, report: &RunReport) {
        let _ = self.tx.try_send(TuiMessage::Log(format!(
            "Run {}: {} after {} frames in {:.3?}",
            report.run, report.outcome, report.frames, report.duration
        )));
    }

    fn present_error(&self, error: &str) {
        let _ = self.tx.try_send(TuiMessage::Error(error.to_string()));
    }
}
