//! Intro screen: the count prompt.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Prompt shown above the input field.
pub const PROMPT: &str = "How many numbers to display?";

/// Render the prompt, the typed input, and the last input error.
pub fn render_intro(
    frame: &mut Frame,
    area: Rect,
    input: &str,
    error: Option<&str>,
    theme: &ColorTheme,
) {
    let [_, center, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(6),
        Constraint::Fill(1),
    ])
    .areas(area);

    let mut lines = vec![
        Line::from(Span::styled(PROMPT, theme.header_style())),
        Line::from(vec![
            Span::raw("> "),
            Span::styled(input.to_string(), theme.text_style()),
            Span::styled("_", theme.muted_style()),
        ]),
    ];
    if let Some(error) = error {
        lines.push(Line::from(Span::styled(error.to_string(), theme.error_style())));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Quicksort ");
    frame.render_widget(Paragraph::new(lines).block(block), center);
}
