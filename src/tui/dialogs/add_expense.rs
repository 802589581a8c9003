//! Add expense flow
//!
//! Prompts for date, category and amount in turn. Date and amount are
//! validated on Enter; a failure is shown under the prompt and the next key
//! clears both the message and the field so it can be typed again. Once all
//! three are accepted the caller persists the expense and the flow asks
//! whether to add another.

use ratatui::{
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

use crate::error::ExpenseResult;
use crate::models::{parse_date, Amount, Expense};
use crate::tui::layout::{box_area, ADD_HEIGHT, BOX_WIDTH};
use crate::tui::theme::Theme;
use crate::tui::widgets::{Notification, TextInput};

/// Which prompt is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddField {
    #[default]
    Date,
    Category,
    Amount,
}

/// Where the flow is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddStep {
    /// Collecting the given field
    Entry(AddField),
    /// Expense recorded; waiting for the add-another answer
    Confirm,
}

/// State for the add expense flow
#[derive(Debug, Clone)]
pub struct AddExpenseState {
    pub date_input: TextInput,
    pub category_input: TextInput,
    pub amount_input: TextInput,
    pub step: AddStep,
    /// Validation failure awaiting acknowledgement
    pub error: Option<Notification>,
    /// Result of persisting the expense, shown in the confirm step
    pub outcome: Option<Notification>,
}

impl AddExpenseState {
    /// Start a fresh entry; `currency` labels the amount prompt
    pub fn new(currency: &str) -> Self {
        let date_label = "📅 Date (DD-MM-YYYY): ";
        let width = date_label.chars().count();

        let mut state = Self {
            date_input: TextInput::new().label(date_label),
            category_input: TextInput::new().label(pad("🏷️ Category: ", width)),
            amount_input: TextInput::new()
                .label(pad(&format!("💲 Amount ({}): ", currency), width)),
            step: AddStep::Entry(AddField::Date),
            error: None,
            outcome: None,
        };
        state.update_focus();
        state
    }

    /// The input receiving keystrokes, if any
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.step {
            AddStep::Entry(AddField::Date) => Some(&mut self.date_input),
            AddStep::Entry(AddField::Category) => Some(&mut self.category_input),
            AddStep::Entry(AddField::Amount) => Some(&mut self.amount_input),
            AddStep::Confirm => None,
        }
    }

    /// Type a character into the active prompt
    pub fn insert(&mut self, c: char) {
        if let Some(input) = self.focused_input() {
            input.insert(c);
        }
    }

    /// Erase the last character of the active prompt
    pub fn backspace(&mut self) {
        if let Some(input) = self.focused_input() {
            input.backspace();
        }
    }

    /// Accept the active prompt
    ///
    /// Returns the finished expense once the amount is accepted. On a
    /// validation failure the error is set and the step is unchanged.
    pub fn submit_field(&mut self) -> Option<Expense> {
        let AddStep::Entry(field) = self.step else {
            return None;
        };

        match field {
            AddField::Date => {
                if parse_date(self.date_input.value()).is_ok() {
                    self.step = AddStep::Entry(AddField::Category);
                } else {
                    self.error = Some(Notification::error("Invalid date! Use DD-MM-YYYY."));
                }
            }
            AddField::Category => {
                self.step = AddStep::Entry(AddField::Amount);
            }
            AddField::Amount => {
                let parsed = parse_date(self.date_input.value())
                    .ok()
                    .zip(Amount::parse(self.amount_input.value()).ok());

                match parsed {
                    Some((date, amount)) => {
                        return Some(Expense::new(
                            date,
                            self.category_input.value().trim(),
                            amount,
                        ));
                    }
                    None => {
                        self.error = Some(Notification::error("Enter a valid number."));
                    }
                }
            }
        }

        self.update_focus();
        None
    }

    /// Acknowledge a validation error and re-prompt with an empty field
    pub fn dismiss_error(&mut self) {
        if self.error.take().is_some() {
            if let Some(input) = self.focused_input() {
                input.clear();
            }
        }
    }

    /// Record whether the expense reached the file and move to the confirm step
    pub fn record_outcome(&mut self, result: ExpenseResult<()>) {
        self.outcome = Some(match result {
            Ok(()) => Notification::success("Expense Added!"),
            Err(e) => Notification::error(format!("Expense kept but not saved: {}", e)),
        });
        self.step = AddStep::Confirm;
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.date_input.focused = self.step == AddStep::Entry(AddField::Date);
        self.category_input.focused = self.step == AddStep::Entry(AddField::Category);
        self.amount_input.focused = self.step == AddStep::Entry(AddField::Amount);
    }

    /// Whether a prompt has been reached (and so should be drawn)
    fn reached(&self, field: AddField) -> bool {
        match self.step {
            AddStep::Entry(current) => current as u8 >= field as u8,
            AddStep::Confirm => true,
        }
    }

    fn error_for(&self, field: AddField) -> Line<'_> {
        match (&self.error, self.step) {
            (Some(error), AddStep::Entry(current)) if current == field => error.to_line(),
            _ => Line::default(),
        }
    }
}

fn pad(label: &str, width: usize) -> String {
    format!("{:<width$}", label, width = width)
}

/// Render the add expense flow
pub fn render(frame: &mut Frame, state: &AddExpenseState, theme: &Theme) {
    let area = box_area(frame.area(), ADD_HEIGHT);
    frame.render_widget(Clear, area);

    let divider = "─".repeat(BOX_WIDTH as usize - 8);
    let mut lines = vec![
        Line::styled("➕ ADD EXPENSE", theme.header()).centered(),
        Line::styled(divider.clone(), theme.frame()),
        Line::default(),
    ];

    let hidden = |field| !state.reached(field);

    lines.push(state.date_input.to_line());
    lines.push(state.error_for(AddField::Date));
    lines.push(if hidden(AddField::Category) {
        Line::default()
    } else {
        state.category_input.to_line()
    });
    lines.push(Line::default());
    lines.push(if hidden(AddField::Amount) {
        Line::default()
    } else {
        state.amount_input.to_line()
    });
    lines.push(state.error_for(AddField::Amount));
    lines.push(Line::default());

    if let (AddStep::Confirm, Some(outcome)) = (state.step, &state.outcome) {
        lines.push(outcome.to_line());
        lines.push(Line::styled("Add another? (y/n): ", theme.prompt()));
    } else {
        lines.push(Line::default());
        lines.push(Line::default());
    }
    lines.push(Line::styled(divider, theme.frame()));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.frame())
        .padding(Padding::horizontal(1));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
