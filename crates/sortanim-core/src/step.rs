//! Step, direction, and frame types shared by the engine and renderers.

use std::fmt;

use serde::Serialize;

/// Comparison polarity for one sort run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    /// Initial direction of a fresh session.
    #[default]
    Descending,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Whether `value` belongs on the left of a partition around `pivot`.
    #[inline]
    #[must_use]
    pub fn precedes(self, value: i32, pivot: i32) -> bool {
        match self {
            Self::Ascending => value < pivot,
            Self::Descending => value > pivot,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One externally observable unit of sort progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// The median-of-three pivot for the current range.
    PivotChosen { index: usize },
    /// `i` is about to be compared against the pivot at `j`.
    Compared { i: usize, j: usize },
    /// The values at `i` and `j` are about to be exchanged. Never `i == j`.
    Swapped { i: usize, j: usize },
    /// The sort finished in the given order.
    Done { order: Direction },
}

impl Step {
    /// The indices this step highlights.
    #[must_use]
    pub fn highlight(&self) -> Highlight {
        match *self {
            Self::PivotChosen { index } => Highlight::One(index),
            Self::Compared { i, j } | Self::Swapped { i, j } => Highlight::Two(i, j),
            Self::Done { .. } => Highlight::None,
        }
    }

    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::PivotChosen { .. } => "pivot",
            Self::Compared { .. } => "compare",
            Self::Swapped { .. } => "swap",
            Self::Done { .. } => "done",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PivotChosen { index } => write!(f, "pivot [{index}]"),
            Self::Compared { i, j } => write!(f, "compare [{i}] with [{j}]"),
            Self::Swapped { i, j } => write!(f, "swap [{i}] <-> [{j}]"),
            Self::Done { order } => write!(f, "done ({order})"),
        }
    }
}

/// Zero, one, or two indices shown emphasised in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    None,
    One(usize),
    Two(usize, usize),
}

impl Highlight {
    /// Whether `index` is highlighted.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        match *self {
            Self::None => false,
            Self::One(a) => a == index,
            Self::Two(a, b) => a == index || b == index,
        }
    }

    /// The highlighted indices in order.
    #[must_use]
    pub fn indices(&self) -> Vec<usize> {
        match *self {
            Self::None => Vec::new(),
            Self::One(a) => vec![a],
            Self::Two(a, b) => vec![a, b],
        }
    }

    /// Whether nothing is highlighted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Whether a frame introduces a new highlight or only refreshes values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// Shows a step with its highlighted indices; full display delay.
    Highlight,
    /// Shows the values after an exchange with no highlight; half delay.
    Refresh,
}

/// Everything a renderer needs to draw one hand-off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFrame {
    /// Position of this frame within the run, starting at 0.
    pub seq: u64,
    /// The step being shown, `None` for a refresh.
    pub step: Option<Step>,
    /// Values at hand-off time.
    pub values: Vec<i32>,
    pub highlight: Highlight,
    pub kind: FrameKind,
}

impl RenderFrame {
    /// A highlight frame for `step`.
    #[must_use]
    pub fn highlight(seq: u64, step: Step, values: Vec<i32>) -> Self {
        Self {
            seq,
            step: Some(step),
            values,
            highlight: step.highlight(),
            kind: FrameKind::Highlight,
        }
    }

    /// A refresh frame with no highlight.
    #[must_use]
    pub fn refresh(seq: u64, values: Vec<i32>) -> Self {
        Self {
            seq,
            step: None,
            values,
            highlight: Highlight::None,
            kind: FrameKind::Refresh,
        }
    }
}

/// Terminal result of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "direction", rename_all = "lowercase")]
pub enum RunOutcome {
    /// The run sorted the whole sequence in the given direction.
    Completed(Direction),
    Cancelled,
}

impl RunOutcome {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed(direction) => write!(f, "completed ({direction})"),
            Self::Cancelled => f.write_str("cancelled"),
        }
    }
}
