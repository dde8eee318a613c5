//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use sortanim_core::Direction;

use crate::styles::ColorTheme;

/// Render the header panel: next direction, size, and run status.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    count: usize,
    direction: Direction,
    status: &str,
    theme: &ColorTheme,
) {
    let text = vec![Line::from(vec![
        Span::styled("SortAnim", theme.header_style()),
        Span::raw(format!(" | {count} numbers | Next: {direction} | ")),
        Span::styled(status.to_string(), theme.muted_style()),
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(" Quicksort ");

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn header_shows_direction_and_status() {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_header(
                    frame,
                    area,
                    12,
                    Direction::Descending,
                    "Sorting",
                    &ColorTheme::default(),
                );
            })
            .unwrap();

        let content: String = (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .map(|pos| buf.buffer[pos].symbol().to_string())
            .collect();
        assert!(content.contains("12 numbers"));
        assert!(content.contains("descending"));
        assert!(content.contains("Sorting"));
    }
}
