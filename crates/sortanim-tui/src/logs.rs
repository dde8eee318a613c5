//! Log panel: shows the most recent messages.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

/// Messages kept in the panel's history.
pub const LOG_CAPACITY: usize = 200;

/// Append `line`, dropping the oldest entry beyond `LOG_CAPACITY`.
pub fn push_log(logs: &mut Vec<String>, line: String) {
    logs.push(line);
    if logs.len() > LOG_CAPACITY {
        logs.remove(0);
    }
}

/// Render the log panel, newest entries at the bottom.
pub fn render_logs(frame: &mut Frame, area: Rect, logs: &[String]) {
    let visible_height = area.height.saturating_sub(2) as usize; // account for borders
    let skip = logs.len().saturating_sub(visible_height);

    let items: Vec<ListItem> = logs
        .iter()
        .skip(skip)
        .map(|log| {
            let style = if log.starts_with("[ERROR]") {
                Style::default().fg(Color::Red)
            } else if log.starts_with("[WARN]") {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            ListItem::new(Line::raw(log.as_str())).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Log ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(list, area);
}
