//! Orchestration interfaces.

use std::time::Duration;

use sortanim_core::RunOutcome;

/// Trait for presenting finished runs to the user.
pub trait OutcomePresenter: Send + Sync {
    /// Present the report of one finished run.
    fn present_run(&self, report: &RunReport);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Summary of one finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Session-unique run id, starting at 1.
    pub run: u64,
    /// How the run ended.
    pub outcome: RunOutcome,
    /// Frames acknowledged by the renderer, including refreshes.
    pub frames: u64,
    /// Values as the run left them.
    pub values: Vec<i32>,
    /// Wall-clock duration of the run.
    pub duration: Duration,
}
