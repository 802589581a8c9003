//! Expense display formatting
//!
//! Formats expenses for plain terminal output and for the rows of the
//! interactive list.

use crate::models::Expense;

/// Message shown when there is nothing to list
pub const EMPTY_MESSAGE: &str = "No expenses added yet.";

/// Format one numbered row: `1. 01-01-2024   | Food            | ₹250    `
///
/// Date, category and amount are left-aligned and padded to 12, 15 and 8
/// columns; longer values are not truncated.
pub fn format_expense_row(position: usize, expense: &Expense, currency: &str) -> String {
    format!(
        "{}. {:<12} | {:<15} | {:<8}",
        position,
        expense.date_string(),
        expense.category,
        expense.amount.format_with_symbol(currency)
    )
}

/// Format the full list for the `list` command
pub fn format_expense_list(expenses: &[Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE);
    }

    let mut output = String::new();
    for (i, expense) in expenses.iter().enumerate() {
        output.push_str(format_expense_row(i + 1, expense, currency).trim_end());
        output.push('\n');
    }

    output
}
