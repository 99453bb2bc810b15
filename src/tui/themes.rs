//! Colors for the terminal host and dialog

use ratatui::style::{Color, Modifier, Style};

/// Theme represents a complete visual style configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub accent: Color,

    pub bg_base: Color,
    pub bg_overlay: Color,
    pub bg_subtle: Color,

    pub fg_base: Color,
    pub fg_muted: Color,
    pub fg_selected: Color,

    pub border: Color,
    pub border_focus: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(0x6b, 0x50, 0xff),
            accent: Color::Rgb(0xff, 0x98, 0x5a),
            bg_base: Color::Rgb(0x20, 0x1f, 0x26),
            bg_overlay: Color::Rgb(0x10, 0x10, 0x14),
            bg_subtle: Color::Rgb(0x3a, 0x39, 0x43),
            fg_base: Color::Rgb(0xdf, 0xdb, 0xdd),
            fg_muted: Color::Rgb(0x85, 0x83, 0x92),
            fg_selected: Color::White,
            border: Color::Rgb(0x3a, 0x39, 0x43),
            border_focus: Color::Rgb(0x6b, 0x50, 0xff),
            warning: Color::Rgb(0xe8, 0xfe, 0x96),
        }
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.fg_base)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.fg_muted)
    }

    /// Dims whatever sits under a modal
    pub fn overlay(&self) -> Style {
        Style::default()
            .bg(self.bg_overlay)
            .fg(self.fg_muted)
            .add_modifier(Modifier::DIM)
    }

    pub fn button(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .bg(self.primary)
                .fg(self.fg_selected)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(self.bg_subtle).fg(self.fg_base)
        }
    }

    pub fn selected_row(&self) -> Style {
        Style::default()
            .bg(self.bg_subtle)
            .fg(self.fg_selected)
            .add_modifier(Modifier::BOLD)
    }
}
