//! Styled status lines for CLI display.

use console::style;

use sortanim_core::RunOutcome;

/// Whether `NO_COLOR` is set.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Tag in front of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Cancelled,
    Error,
}

impl Status {
    #[must_use]
    pub fn for_outcome(outcome: RunOutcome) -> Self {
        match outcome {
            RunOutcome::Completed(_) => Self::Ok,
            RunOutcome::Cancelled => Self::Cancelled,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Cancelled => "[CANCELLED]",
            Self::Error => "[ERROR]",
        }
    }
}

/// `tag text`; the tag is bold green, yellow or red when `color` is set.
#[must_use]
pub fn status_line(status: Status, text: &str, color: bool) -> String {
    if !color {
        return format!("{} {text}", status.tag());
    }
    let tag = style(status.tag()).bold().force_styling(true);
    let tag = match status {
        Status::Ok => tag.green(),
        Status::Cancelled => tag.yellow(),
        Status::Error => tag.red(),
    };
    format!("{tag} {text}")
}

/// `=== Run n ===`, bold cyan when `color` is set.
#[must_use]
pub fn run_header(run: u64, color: bool) -> String {
    let text = format!("=== Run {run} ===");
    if color {
        style(text).bold().cyan().force_styling(true).to_string()
    } else {
        text
    }
}

pub fn print_run_header(run: u64) {
    println!("{}", run_header(run, !is_color_disabled()));
}

/// Print a status line; errors go to stderr.
pub fn print_status(status: Status, text: &str) {
    let line = status_line(status, text, !is_color_disabled());
    if status == Status::Error {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}
