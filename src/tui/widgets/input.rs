//! Text input widget
//!
//! A single-line, echoed prompt with a length cap and an end-of-line cursor.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Default maximum number of characters accepted by a prompt
pub const DEFAULT_MAX_LEN: usize = 20;

/// A simple text input widget
#[derive(Debug, Clone)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Whether the input is focused
    pub focused: bool,
    /// Prompt shown before the content
    pub label: String,
    /// Maximum number of characters accepted
    pub max_len: usize,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self {
            content: String::new(),
            focused: false,
            label: String::new(),
            max_len: DEFAULT_MAX_LEN,
        }
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set the maximum length
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Append a character; ignored once the input is full
    pub fn insert(&mut self, c: char) {
        if self.content.chars().count() < self.max_len {
            self.content.push(c);
        }
    }

    /// Delete the last character
    pub fn backspace(&mut self) {
        self.content.pop();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// The prompt, the echoed content and (when focused) a cursor block
    pub fn to_line(&self) -> Line<'_> {
        let mut spans = vec![
            Span::styled(
                self.label.as_str(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.content.as_str(), Style::default().fg(Color::White)),
        ];

        if self.focused {
            spans.push(Span::styled(
                "_",
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));
        }

        Line::from(spans)
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_line(area.x, area.y, &self.to_line(), area.width);
    }
}
