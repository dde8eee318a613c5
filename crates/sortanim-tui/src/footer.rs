//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::keymap::Screen;

fn hints(screen: Screen) -> &'static [(&'static str, &'static str)] {
    match screen {
        Screen::Intro => &[("Enter", "generate"), ("Esc", "quit")],
        Screen::Sort => &[
            ("s", "sort"),
            ("c", "cancel"),
            ("r", "reset"),
            ("Enter", "pick (<= 30 regenerates)"),
            ("arrows", "move"),
            ("q", "quit"),
        ],
    }
}

/// Render the footer panel with the keyboard shortcuts of `screen`.
pub fn render_footer(frame: &mut Frame, area: Rect, screen: Screen) {
    let mut spans = Vec::new();
    for (i, (key, action)) in hints(screen).iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!(": {action}")));
    }

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
