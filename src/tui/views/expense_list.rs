//! Numbered expense rows
//!
//! Shared by the main menu's record panel and the delete flow, so the
//! numbers a user reads in one are the numbers they type in the other.

use ratatui::text::Line;

use crate::display::format_expense_row;
use crate::models::Expense;

/// Lines for the first `limit` expenses, numbered from 1
pub fn expense_lines(expenses: &[Expense], limit: usize, currency: &str) -> Vec<Line<'static>> {
    expenses
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, expense)| {
            Line::raw(format!(
                "▸ {}",
                format_expense_row(i + 1, expense, currency)
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use chrono::NaiveDate;

    #[test]
    fn test_lines_are_truncated_to_limit() {
        let expenses: Vec<_> = (1..=5)
            .map(|d| {
                Expense::new(
                    NaiveDate::from_ymd_opt(2024, 1, d).unwrap(),
                    "Food",
                    Amount::new(10),
                )
            })
            .collect();

        let lines = expense_lines(&expenses, 3, "₹");
        assert_eq!(lines.len(), 3);
        assert!(lines[0].to_string().starts_with("▸ 1. 01-01-2024"));
        assert!(lines[2].to_string().starts_with("▸ 3. 03-01-2024"));

        assert_eq!(expense_lines(&expenses, 10, "₹").len(), 5);
        assert!(expense_lines(&expenses, 0, "₹").is_empty());
    }
}
