//! CLI run presenter.

use sortanim_orchestration::interfaces::{OutcomePresenter, RunReport};

use crate::output::{format_duration, format_sequence};
use crate::ui::{print_run_header, print_status, Status};

/// Prints a summary per finished run.
///
/// Quiet mode prints only the values of each completed run, one line per run.
pub struct CliOutcomePresenter {
    verbose: bool,
    quiet: bool,
}

impl CliOutcomePresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

/// One-line summary of a run, without the values.
#[must_use]
pub fn summary_line(report: &RunReport) -> String {
    format!(
        "{} after {} frames in {}",
        report.outcome,
        report.frames,
        format_duration(report.duration)
    )
}

impl OutcomePresenter for CliOutcomePresenter {
    fn present_run(&self, report: &RunReport) {
        if self.quiet {
            if report.outcome.is_completed() {
                println!("{}", format_sequence(&report.values));
            }
            return;
        }

        print_run_header(report.run);
        print_status(Status::for_outcome(report.outcome), &summary_line(report));
        if self.verbose || report.outcome.is_completed() {
            println!("Values: {}", format_sequence(&report.values));
        }
    }

    fn present_error(&self, error: &str) {
        print_status(Status::Error, error);
    }
}
