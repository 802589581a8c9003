//! Main menu view
//!
//! A fixed box with the three choices and, on wide terminals, the record
//! panel listing as many expenses as fit.

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

use crate::display::EMPTY_MESSAGE;
use crate::tui::app::App;
use crate::tui::layout::{box_area, panel_area, shows_panel, visible_rows, BOX_WIDTH, MENU_HEIGHT};
use crate::tui::widgets::Notification;

use super::expense_list::expense_lines;

/// Render the main menu
pub fn render(frame: &mut Frame, app: &App) {
    render_menu(frame, app, box_area(frame.area(), MENU_HEIGHT));

    if shows_panel(frame.area().width) {
        render_panel(frame, app, panel_area(frame.area()));
    }
}

fn render_menu(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let divider = Line::styled("─".repeat(BOX_WIDTH as usize - 8), theme.frame());

    let lines = vec![
        Line::styled("📊 EXPENSE TRACKER", theme.header()).centered(),
        divider.clone(),
        Line::default(),
        Line::styled("➤ 1. Add Expenses", theme.item()),
        Line::styled("➤ 2. Delete Expenses", theme.item()),
        Line::styled("✖ 3. Exit", theme.exit_item()),
        Line::default(),
        divider,
        Line::styled("➔ Enter your choice: ", theme.prompt()),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.frame())
        .padding(Padding::horizontal(1));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// The record panel, aligned with the menu items
fn render_panel(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let expenses = app.ledger.expenses();

    let mut lines = vec![
        Line::default(),
        Line::default(),
        Line::default(),
        Line::default(),
        Line::styled("📋 YOUR EXPENSES", theme.header()),
        Line::styled("─".repeat(20), theme.frame()),
    ];

    if expenses.is_empty() {
        lines.push(Notification::info(EMPTY_MESSAGE).to_line());
    } else {
        lines.push(Line::default());
        lines.extend(expense_lines(expenses, visible_rows(area.height), app.currency()));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
