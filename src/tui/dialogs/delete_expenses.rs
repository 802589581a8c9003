//! Delete expenses flow
//!
//! Shows the numbered list (cut to the rows that fit) and reads one line of
//! comma-separated positions. Only positions visible in that list can be
//! targeted. Every outcome is shown in place and the next key returns to the
//! main menu.

use ratatui::{
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};
use tracing::warn;

use crate::models::Expense;
use crate::services::{parse_index_list, Ledger};
use crate::tui::layout::{box_area, BOX_WIDTH, RESERVED_ROWS};
use crate::tui::theme::Theme;
use crate::tui::views::expense_list::expense_lines;
use crate::tui::widgets::{Notification, TextInput};

/// Maximum length of the index list
pub const INDEX_INPUT_MAX_LEN: usize = 50;

/// Where the flow is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletePhase {
    /// Reading the index list
    Input,
    /// There was nothing to delete
    NothingToDelete,
    /// Input was empty or held no usable index; nothing changed
    Rejected(Notification),
    /// This many expenses were removed
    Deleted(usize),
    /// Expenses were removed from memory but the file could not be written
    SaveFailed(Notification),
}

/// State for the delete flow
#[derive(Debug, Clone)]
pub struct DeleteExpensesState {
    pub input: TextInput,
    /// How many list rows fit on screen
    pub row_budget: usize,
    pub phase: DeletePhase,
}

impl DeleteExpensesState {
    /// Open the flow for a ledger holding `count` expenses
    pub fn new(count: usize, row_budget: usize) -> Self {
        let phase = if count == 0 {
            DeletePhase::NothingToDelete
        } else {
            DeletePhase::Input
        };

        Self {
            input: TextInput::new()
                .label("➔ Enter numbers (e.g., 1,3,5): ")
                .max_len(INDEX_INPUT_MAX_LEN)
                .focused(true),
            row_budget,
            phase,
        }
    }

    /// Whether keys go into the index prompt
    pub fn is_reading_input(&self) -> bool {
        self.phase == DeletePhase::Input
    }

    /// Parse the typed positions and delete from `ledger`
    ///
    /// Positions are checked against the rows shown, not the whole ledger.
    pub fn submit(&mut self, ledger: &mut Ledger) {
        self.input.focused = false;

        if self.input.value().trim().is_empty() {
            self.phase = DeletePhase::Rejected(Notification::error("No input provided!"));
            return;
        }

        let shown = ledger.len().min(self.row_budget);
        let indices = parse_index_list(self.input.value(), shown);
        if indices.is_empty() {
            self.phase = DeletePhase::Rejected(Notification::error("No valid indices provided!"));
            return;
        }

        self.phase = match ledger.delete_indices(&indices) {
            Ok(deleted) => DeletePhase::Deleted(deleted),
            Err(e) => {
                warn!(error = %e, "delete flow could not save");
                DeletePhase::SaveFailed(Notification::error(format!("Error: {}", e)))
            }
        };
    }

    /// The message for the current phase, if it has one
    pub fn message(&self) -> Option<Notification> {
        match &self.phase {
            DeletePhase::Input => None,
            DeletePhase::NothingToDelete => Some(Notification::info("No expenses to delete.")),
            DeletePhase::Rejected(n) | DeletePhase::SaveFailed(n) => Some(n.clone()),
            DeletePhase::Deleted(count) => {
                Some(Notification::success(format!("{} expense(s) deleted!", count)))
            }
        }
    }
}

/// Render the delete flow
pub fn render(
    frame: &mut Frame,
    state: &DeleteExpensesState,
    expenses: &[Expense],
    currency: &str,
    theme: &Theme,
) {
    let divider = Line::styled("─".repeat(BOX_WIDTH as usize - 8), theme.frame());
    let mut lines = vec![
        Line::styled("🗑️ DELETE EXPENSES", theme.header()).centered(),
        divider.clone(),
        Line::default(),
    ];

    if state.phase != DeletePhase::NothingToDelete {
        lines.extend(expense_lines(expenses, state.row_budget, currency));
    }
    lines.push(divider.clone());

    let shows_prompt = matches!(state.phase, DeletePhase::Input | DeletePhase::Rejected(_));
    if shows_prompt {
        lines.push(state.input.to_line());
    }
    if let Some(message) = state.message() {
        lines.push(message.to_line().centered());
        // With the prompt still up a full list leaves room for the message only
        if !shows_prompt {
            lines.push(divider);
        }
    }

    let height = lines.len() as u16 + 2;
    let area = box_area(frame.area(), height.max(RESERVED_ROWS));
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.frame())
        .padding(Padding::horizontal(1));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use crate::storage::ExpenseRepository;
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use tempfile::TempDir;

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    fn draw(state: &DeleteExpensesState, ledger: &Ledger, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(70, height)).unwrap();
        terminal
            .draw(|frame| render(frame, state, ledger.expenses(), "₹", &Theme::default()))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn ledger_with(temp_dir: &TempDir, count: u32) -> Ledger {
        let mut ledger =
            Ledger::open(ExpenseRepository::new(temp_dir.path().join("expenses.txt"))).unwrap();
        for day in 1..=count {
            ledger
                .add(Expense::new(
                    NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
                    format!("item{}", day),
                    Amount::new(day as u64),
                ))
                .unwrap();
        }
        ledger
    }

    fn submit(state: &mut DeleteExpensesState, ledger: &mut Ledger, text: &str) {
        for c in text.chars() {
            state.input.insert(c);
        }
        state.submit(ledger);
    }

    #[test]
    fn test_empty_ledger_has_nothing_to_delete() {
        let state = DeleteExpensesState::new(0, 10);
        assert_eq!(state.phase, DeletePhase::NothingToDelete);
        assert!(!state.is_reading_input());
        assert_eq!(state.message().unwrap().text(), "○ No expenses to delete.");
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = ledger_with(&temp_dir, 3);
        let mut state = DeleteExpensesState::new(ledger.len(), 10);

        submit(&mut state, &mut ledger, "   ");
        assert_eq!(state.message().unwrap().text(), "✖ No input provided!");
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_no_valid_indices_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = ledger_with(&temp_dir, 3);
        let mut state = DeleteExpensesState::new(ledger.len(), 10);

        submit(&mut state, &mut ledger, "abc, , 99");
        assert_eq!(state.message().unwrap().text(), "✖ No valid indices provided!");
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_deletes_selected_positions() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = ledger_with(&temp_dir, 5);
        let mut state = DeleteExpensesState::new(ledger.len(), 10);

        submit(&mut state, &mut ledger, "2,4");
        assert_eq!(state.phase, DeletePhase::Deleted(2));
        assert_eq!(state.message().unwrap().text(), "✔ 2 expense(s) deleted!");

        let left: Vec<_> = ledger.expenses().iter().map(|e| e.category.as_str()).collect();
        assert_eq!(left, vec!["item1", "item3", "item5"]);
    }

    #[test]
    fn test_rows_beyond_the_screen_cannot_be_targeted() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = ledger_with(&temp_dir, 5);
        let mut state = DeleteExpensesState::new(ledger.len(), 3);

        submit(&mut state, &mut ledger, "4,5");
        assert!(matches!(state.phase, DeletePhase::Rejected(_)));
        assert_eq!(ledger.len(), 5);

        let mut state = DeleteExpensesState::new(ledger.len(), 3);
        submit(&mut state, &mut ledger, "3,4,5");
        assert_eq!(state.phase, DeletePhase::Deleted(1));
        assert_eq!(ledger.len(), 4);
    }

    #[test]
    fn test_rejected_full_list_keeps_bottom_border() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = ledger_with(&temp_dir, 8);
        let height = 14;
        let mut state = DeleteExpensesState::new(ledger.len(), 6);

        submit(&mut state, &mut ledger, "abc");
        let buffer = draw(&state, &ledger, height);

        let screen: Vec<String> = (0..height).map(|y| row(&buffer, y)).collect();
        assert!(screen.iter().any(|r| r.contains("No valid indices provided!")));
        assert!(screen.iter().any(|r| r.contains("6. 06-01-2024")));
        assert!(!screen.iter().any(|r| r.contains("7. 07-01-2024")));
        assert_eq!(buffer[(2, height - 1)].symbol(), "└");
    }

    #[test]
    fn test_render_deleted_message() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = ledger_with(&temp_dir, 3);
        let mut state = DeleteExpensesState::new(ledger.len(), 10);

        submit(&mut state, &mut ledger, "1");
        let buffer = draw(&state, &ledger, 20);

        let screen: String = (0..20).map(|y| row(&buffer, y)).collect();
        assert!(screen.contains("1 expense(s) deleted!"));
        assert!(!screen.contains("Enter numbers"));
    }

    #[test]
    fn test_render_empty_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = ledger_with(&temp_dir, 0);
        let state = DeleteExpensesState::new(0, 10);

        let buffer = draw(&state, &ledger, 20);
        let screen: String = (0..20).map(|y| row(&buffer, y)).collect();
        assert!(screen.contains("No expenses to delete."));
        assert!(!screen.contains("▸"));
    }
}
