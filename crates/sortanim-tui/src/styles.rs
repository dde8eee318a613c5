//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI.
pub struct ColorTheme {
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Magenta,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
        }
    }
}

impl ColorTheme {
    /// Get the style for a header.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for normal text.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get the style for muted text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Get the style for error text.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style of a grid cell.
    ///
    /// Highlighted cells take the accent background; the selected cell is
    /// reversed; small values that can regenerate the grid are tinted.
    #[must_use]
    pub fn cell_style(&self, highlighted: bool, selected: bool, small: bool) -> Style {
        let mut style = if highlighted {
            Style::default()
                .fg(Color::Black)
                .bg(self.accent)
                .add_modifier(Modifier::BOLD)
        } else if small {
            Style::default().fg(self.warning)
        } else {
            self.text_style()
        };
        if selected {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }
}
