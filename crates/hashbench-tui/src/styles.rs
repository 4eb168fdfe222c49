//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};

/// Line colors, cycled per algorithm.
const SERIES_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Magenta,
    Color::Green,
    Color::Yellow,
    Color::LightBlue,
    Color::LightRed,
];

/// Color theme for the viewer.
pub struct ColorTheme {
    pub primary: Color,
    pub text: Color,
    pub muted: Color,
    pub key: Color,
    pub border: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            text: Color::White,
            muted: Color::DarkGray,
            key: Color::Yellow,
            border: Color::Gray,
        }
    }
}

impl ColorTheme {
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::default().fg(self.key)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style of the line for the algorithm at `index`; baselines are dimmed.
    #[must_use]
    pub fn series_style(&self, index: usize, reference: bool) -> Style {
        let style = Style::default().fg(SERIES_COLORS[index % SERIES_COLORS.len()]);
        if reference {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }
}
