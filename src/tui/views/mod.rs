//! TUI Views module
//!
//! One view per screen. Flows draw over a cleared frame; the main menu adds
//! the record panel when there is room.

pub mod expense_list;
pub mod main_menu;

use ratatui::{layout::Rect, widgets::Paragraph, Frame};

use super::app::{App, Screen};
use super::dialogs;
use super::widgets::Notification;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    match &app.screen {
        Screen::MainMenu => main_menu::render(frame, app),
        Screen::AddExpense(state) => dialogs::add_expense::render(frame, state, &app.theme),
        Screen::DeleteExpenses(state) => dialogs::delete_expenses::render(
            frame,
            state,
            app.ledger.expenses(),
            app.currency(),
            &app.theme,
        ),
        Screen::TooSmall => render_too_small(frame),
    }
}

fn render_too_small(frame: &mut Frame) {
    let area = frame.area();
    let message = Notification::error("Terminal too small! Resize & restart.");
    let target =
        Rect::new(area.x + 2, area.y + 2, area.width.saturating_sub(2), 1).intersection(area);

    frame.render_widget(Paragraph::new(message.to_line()), target);
}
