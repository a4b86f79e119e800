//! Colors for species and panels. Every style collapses to the terminal
//! default when the color preference is off.

use ratatui::style::{Color, Style, Stylize};

use ps_core::TrophicLevel;

/// Foreground color of a trophic level.
pub fn level_color(level: TrophicLevel) -> Color {
    match level {
        TrophicLevel::Grass => Color::Green,
        TrophicLevel::Grasshopper => Color::Yellow,
        TrophicLevel::Frog => Color::Blue,
        TrophicLevel::Snake => Color::Red,
        TrophicLevel::Eagle => Color::White,
    }
}

/// Palette resolved against the color preference.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    color: bool,
}

impl Theme {
    /// Build a theme; `color = false` yields plain styles only.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn fg(self, color: Color) -> Style {
        if self.color {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    /// Style of a species row or mix cell.
    pub fn level(self, level: TrophicLevel) -> Style {
        self.fg(level_color(level))
    }

    /// Header and footer hints.
    pub fn header(self) -> Style {
        self.fg(Color::Cyan)
    }

    /// Panel labels and log text.
    pub fn label(self) -> Style {
        self.fg(Color::Magenta)
    }

    /// Panel borders.
    pub fn border(self) -> Style {
        self.fg(Color::DarkGray)
    }

    /// The selected species row.
    pub fn selected(self, level: TrophicLevel) -> Style {
        self.level(level).bold()
    }
}
