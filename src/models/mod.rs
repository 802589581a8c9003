//! Core data models for the expense tracker
//!
//! The only entity is the [`Expense`]: a date, a category label and a
//! whole-unit [`Amount`].

pub mod amount;
pub mod expense;

pub use amount::{Amount, AmountParseError};
pub use expense::{
    format_date, parse_date, sort_by_date, validate_category, Expense, DATE_FORMAT,
};
