use ratatui::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct Theme;

impl Theme {
    /// Borders of the focused control and other active elements.
    pub const PRIMARY: Color = Color::Rgb(99, 102, 241); // Indigo
    /// Highlighted panel row.
    pub const SECONDARY: Color = Color::Rgb(129, 140, 248);
    /// Dismissable value tokens.
    pub const TOKEN: Color = Color::Rgb(79, 70, 229);

    // Text colors
    pub const TEXT_NORMAL: Color = Color::White;
    pub const TEXT_DIM: Color = Color::DarkGray;

    pub fn new() -> Self {
        Self
    }

    // --- Block / Border Styles ---

    pub fn block_active(&self) -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn block_inactive(&self) -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    // --- Text Styles ---

    pub fn text_normal(&self) -> Style {
        Style::default().fg(Self::TEXT_NORMAL)
    }

    pub fn text_dim(&self) -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    pub fn text_highlight(&self) -> Style {
        Style::default()
            .fg(Self::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    // --- Control parts ---

    pub fn token(&self) -> Style {
        Style::default().bg(Self::TOKEN).fg(Color::White)
    }

    pub fn clear_button(&self) -> Style {
        Style::default().fg(Self::TEXT_DIM).add_modifier(Modifier::BOLD)
    }

    // --- Panel rows ---

    /// An option that is part of the current value.
    pub fn option_selected(&self) -> Style {
        Style::default().bg(Self::PRIMARY).fg(Color::White)
    }

    /// The row under the keyboard or pointer cursor.
    pub fn option_highlighted(&self) -> Style {
        Style::default()
            .bg(Self::SECONDARY)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }
}
