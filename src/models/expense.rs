//! Expense model
//!
//! An expense is a dated, categorised amount. Dates are exchanged with the
//! user and the expense file as `DD-MM-YYYY`.

use chrono::NaiveDate;
use std::fmt;

use super::amount::Amount;
use crate::error::ExpenseError;

/// chrono format string for the external date representation
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    /// Calendar date the money was spent
    pub date: NaiveDate,

    /// Free-text label
    pub category: String,

    /// Amount spent in whole units
    pub amount: Amount,
}

impl Expense {
    /// Create a new expense
    pub fn new(date: NaiveDate, category: impl Into<String>, amount: Amount) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
        }
    }

    /// Build an expense from raw user input, validating all three fields
    ///
    /// The category may not hold control characters (a newline would split
    /// the stored line) or the `", "` field separator.
    pub fn from_input(date: &str, category: &str, amount: &str) -> Result<Self, ExpenseError> {
        let date = parse_date(date)?;
        let category = validate_category(category)?;
        let amount =
            Amount::parse(amount).map_err(|e| ExpenseError::Validation(e.to_string()))?;
        Ok(Self::new(date, category, amount))
    }

    /// The date in `DD-MM-YYYY` form
    pub fn date_string(&self) -> String {
        format_date(self.date)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date_string(), self.category, self.amount)
    }
}

/// Trim a category and reject text the expense file cannot hold on one line
pub fn validate_category(category: &str) -> Result<&str, ExpenseError> {
    let category = category.trim();

    if category.chars().any(char::is_control) {
        return Err(ExpenseError::Validation(
            "Category must not contain control characters".into(),
        ));
    }
    if category.contains(", ") {
        return Err(ExpenseError::Validation(
            "Category must not contain \", \"".into(),
        ));
    }

    Ok(category)
}

/// Parse a `DD-MM-YYYY` date
///
/// The shape is checked strictly (two-digit day and month, four-digit year)
/// before chrono validates the calendar date, so `1-1-24` and `2024-01-01` are
/// rejected along with impossible dates such as `31-02-2024`.
pub fn parse_date(s: &str) -> Result<NaiveDate, ExpenseError> {
    let s = s.trim();
    let bytes = s.as_bytes();

    let well_formed = bytes.len() == 10
        && bytes[2] == b'-'
        && bytes[5] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());

    if !well_formed {
        return Err(ExpenseError::Validation(format!(
            "Invalid date '{}': use DD-MM-YYYY",
            s
        )));
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| ExpenseError::Validation(format!("Invalid date '{}': {}", s, e)))
}

/// Format a date as `DD-MM-YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Stable sort by date; expenses sharing a date keep their relative order
pub fn sort_by_date(expenses: &mut [Expense]) {
    expenses.sort_by_key(|e| e.date);
}
