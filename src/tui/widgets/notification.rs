//! Inline notification widget
//!
//! Errors and confirmations are drawn in place on the screen that raised
//! them, as a single coloured line, and stay until the next keypress.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Line,
};

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Neutral message (e.g. an empty list)
    Info,
    /// Success message
    Success,
    /// Error message
    Error,
}

impl NotificationType {
    /// Get the color for this notification type
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Red,
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }

    /// Get the icon/prefix for this notification type
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "○",
            Self::Success => "✔",
            Self::Error => "✖",
        }
    }
}

/// An inline notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// The notification message, without icon
    pub message: String,
    /// Type of notification
    pub notification_type: NotificationType,
}

impl Notification {
    /// Create a new notification
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
        }
    }

    /// Create an info notification
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    /// Create a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    /// Create an error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    /// The message with its icon, as displayed
    pub fn text(&self) -> String {
        format!("{} {}", self.notification_type.icon(), self.message)
    }

    /// Render as a styled line
    pub fn to_line(&self) -> Line<'static> {
        Line::styled(
            self.text(),
            Style::default()
                .fg(self.notification_type.color())
                .add_modifier(Modifier::BOLD),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_text() {
        assert_eq!(
            Notification::error("Invalid date! Use DD-MM-YYYY.").text(),
            "✖ Invalid date! Use DD-MM-YYYY."
        );
        assert_eq!(Notification::success("Expense Added!").text(), "✔ Expense Added!");
        assert_eq!(
            Notification::info("No expenses to delete.").text(),
            "○ No expenses to delete."
        );
    }

    #[test]
    fn test_notification_colors() {
        assert_eq!(NotificationType::Success.color(), Color::Green);
        assert_eq!(NotificationType::Error.color(), Color::Red);
    }
}
