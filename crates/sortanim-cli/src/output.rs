//! CLI output formatting.

use std::time::Duration;

use console::style;

use sortanim_core::{FrameKind, RenderFrame};

/// Join values with single spaces.
#[must_use]
pub fn format_sequence(values: &[i32]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Label shown in front of a frame: the step, or `refresh`.
#[must_use]
pub fn frame_label(frame: &RenderFrame) -> String {
    match (frame.kind, frame.step) {
        (FrameKind::Highlight, Some(step)) => step.to_string(),
        _ => "refresh".to_string(),
    }
}

/// Render one frame as a single line.
///
/// Highlighted values are bracketed when `color` is off, and drawn bold
/// yellow otherwise.
#[must_use]
pub fn format_frame(frame: &RenderFrame, color: bool) -> String {
    let cells: Vec<String> = frame
        .values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            if !frame.highlight.contains(index) {
                value.to_string()
            } else if color {
                style(value).yellow().bold().force_styling(true).to_string()
            } else {
                format!("[{value}]")
            }
        })
        .collect();
    format!(
        "{:>5}  {:<22} {}",
        frame.seq,
        frame_label(frame),
        cells.join(" ")
    )
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortanim_core::{Direction, Step};

    #[test]
    fn sequence_is_space_joined() {
        assert_eq!(format_sequence(&[500, 42, 15, 7, 3]), "500 42 15 7 3");
        assert_eq!(format_sequence(&[]), "");
    }

    #[test]
    fn plain_frame_brackets_highlight() {
        let frame = RenderFrame::highlight(3, Step::Swapped { i: 0, j: 2 }, vec![9, 4, 1]);
        let line = format_frame(&frame, false);
        assert!(line.ends_with("[9] 4 [1]"), "{line}");
        assert!(line.trim_start().starts_with('3'));
    }

    #[test]
    fn refresh_frame_has_no_brackets() {
        let frame = RenderFrame::refresh(4, vec![1, 4, 9]);
        let line = format_frame(&frame, false);
        assert!(line.contains("refresh"));
        assert!(line.ends_with("1 4 9"));
        assert!(!line.contains('['));
    }

    #[test]
    fn done_frame_label() {
        let frame = RenderFrame::highlight(
            0,
            Step::Done {
                order: Direction::Ascending,
            },
            vec![1],
        );
        assert_eq!(
            frame_label(&frame),
            Step::Done {
                order: Direction::Ascending
            }
            .to_string()
        );
    }

    #[test]
    fn colored_frame_styles_highlight() {
        let frame = RenderFrame::highlight(0, Step::PivotChosen { index: 1 }, vec![5, 6]);
        let line = format_frame(&frame, true);
        assert!(line.contains("\u{1b}["));
        assert!(!line.contains("[6]"));
        assert!(line.contains("5 "));
    }

    #[test]
    fn format_duration_micro() {
        let s = format_duration(Duration::from_nanos(500));
        assert!(s.contains("µs"));
    }

    #[test]
    fn format_duration_milli() {
        let s = format_duration(Duration::from_millis(42));
        assert!(s.contains("ms"));
    }

    #[test]
    fn format_duration_minutes() {
        let s = format_duration(Duration::from_secs(90));
        assert_eq!(s, "1m30.0s");
    }
}
