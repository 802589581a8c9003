//! Colours shared by every screen

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub error: Color,
    pub prompt: Color,
    pub item: Color,
    pub frame: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            error: Color::Red,
            prompt: Color::Cyan,
            item: Color::White,
            frame: Color::Magenta,
        }
    }
}

impl Theme {
    pub fn frame(&self) -> Style {
        Style::default().fg(self.frame)
    }

    pub fn header(&self) -> Style {
        self.frame().add_modifier(Modifier::BOLD)
    }

    pub fn prompt(&self) -> Style {
        Style::default().fg(self.prompt).add_modifier(Modifier::BOLD)
    }

    pub fn item(&self) -> Style {
        Style::default().fg(self.item).add_modifier(Modifier::BOLD)
    }

    pub fn exit_item(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }
}
