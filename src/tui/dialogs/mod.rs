//! Flow screens entered from the main menu

pub mod add_expense;
pub mod delete_expenses;
