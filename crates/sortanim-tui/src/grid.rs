//! Number grid: values laid out top to bottom in columns of `COLUMN_HEIGHT`.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use sortanim_core::constants::COLUMN_HEIGHT;
use sortanim_core::generator::is_regenerate_trigger;
use sortanim_core::Highlight;

use crate::keymap::KeyAction;
use crate::styles::ColorTheme;

/// Width of one cell including its trailing gap.
pub const CELL_WIDTH: u16 = 6;

/// `(column, row)` of the value at `index`.
#[must_use]
pub fn cell_position(index: usize) -> (usize, usize) {
    (index / COLUMN_HEIGHT, index % COLUMN_HEIGHT)
}

/// Number of columns needed for `len` values.
#[must_use]
pub fn column_count(len: usize) -> usize {
    len.div_ceil(COLUMN_HEIGHT)
}

/// Move the selection within the grid; moves that leave it are ignored.
#[must_use]
pub fn move_selection(selected: usize, len: usize, action: KeyAction) -> usize {
    let (_, row) = cell_position(selected);
    let target = match action {
        KeyAction::Up if row > 0 => Some(selected - 1),
        KeyAction::Down if row + 1 < COLUMN_HEIGHT => Some(selected + 1),
        KeyAction::Left => selected.checked_sub(COLUMN_HEIGHT),
        KeyAction::Right => Some(selected + COLUMN_HEIGHT),
        _ => None,
    };
    target.filter(|&t| t < len).unwrap_or(selected)
}

/// First column to draw so that `selected` stays visible in `visible` columns.
#[must_use]
pub fn first_visible_column(selected: usize, visible: usize) -> usize {
    let (column, _) = cell_position(selected);
    column.saturating_sub(visible.saturating_sub(1))
}

/// Render the grid panel.
pub fn render_grid(
    frame: &mut Frame,
    area: Rect,
    values: &[i32],
    highlight: Highlight,
    selected: usize,
    theme: &ColorTheme,
) {
    let inner_width = area.width.saturating_sub(2);
    let visible = usize::from((inner_width / CELL_WIDTH).max(1));
    let first = first_visible_column(selected, visible);
    let columns = column_count(values.len());

    let lines: Vec<Line> = (0..COLUMN_HEIGHT)
        .map(|row| {
            let spans: Vec<Span> = (first..columns.min(first + visible))
                .filter_map(|column| {
                    let index = column * COLUMN_HEIGHT + row;
                    values.get(index).map(|&value| {
                        let style = theme.cell_style(
                            highlight.contains(index),
                            index == selected,
                            is_regenerate_trigger(value),
                        );
                        Span::styled(format!("{value:>5}"), style)
                    })
                })
                .flat_map(|cell| [cell, Span::raw(" ")])
                .collect();
            Line::from(spans)
        })
        .collect();

    let title = if first > 0 || columns > first + visible {
        format!(" Numbers ({} of {} columns) ", visible.min(columns), columns)
    } else {
        " Numbers ".to_string()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(ratatui::style::Style::default().fg(theme.border));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
