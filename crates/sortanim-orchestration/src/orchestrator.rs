//! Back-to-back runs over a session's retained sequence.

use sortanim_core::{CancellationToken, SortError};

use crate::interfaces::{OutcomePresenter, RunReport};
use crate::session::AnimationSession;

/// Sort the retained sequence `runs` times, alternating direction, and
/// present each report.
///
/// Stops early once `stop` is cancelled or a run ends cancelled. Returns the
/// reports of the runs that were started.
pub fn execute_runs(
    session: &AnimationSession,
    runs: usize,
    stop: &CancellationToken,
    presenter: &dyn OutcomePresenter,
) -> Result<Vec<RunReport>, SortError> {
    let mut reports = Vec::with_capacity(runs);
    for _ in 0..runs {
        if stop.is_cancelled() {
            break;
        }
        let handle = match session.start_current() {
            Ok(handle) => handle,
            Err(e) => {
                presenter.present_error(&e.to_string());
                return Err(e);
            }
        };
        let report = handle.join();
        presenter.present_run(&report);
        let completed = report.outcome.is_completed();
        reports.push(report);
        if !completed {
            break;
        }
    }
    Ok(reports)
}

/// Whether every run in `reports` completed and at least one ran.
#[must_use]
pub fn all_completed(reports: &[RunReport]) -> bool {
    !reports.is_empty() && reports.iter().all(|r| r.outcome.is_completed())
}
