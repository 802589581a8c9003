//! Expense CLI commands
//!
//! Non-interactive counterparts of the Add and Delete flows, plus a plain
//! listing. They share validation and persistence with the TUI through
//! [`Ledger`].

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_expense_list;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::services::{parse_index_list, Ledger};

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// List all expenses, oldest first
    #[command(alias = "ls")]
    List,
    /// Record an expense
    Add {
        /// Date spent (DD-MM-YYYY)
        date: String,
        /// Free-text category
        category: String,
        /// Whole amount, digits only
        amount: String,
    },
    /// Delete expenses by their 1-based positions in `list`
    #[command(alias = "rm")]
    Delete {
        /// Comma-separated positions, e.g. "1,3,5"
        indices: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    match cmd {
        ExpenseCommands::List => {
            print!("{}", format_expense_list(ledger.expenses(), &settings.currency_symbol));
        }

        ExpenseCommands::Add {
            date,
            category,
            amount,
        } => {
            let expense = Expense::from_input(&date, &category, &amount)?;
            let summary = format!(
                "{} | {} | {}",
                expense.date_string(),
                expense.category,
                expense.amount.format_with_symbol(&settings.currency_symbol)
            );
            ledger.add(expense)?;
            println!("Expense added: {}", summary);
        }

        ExpenseCommands::Delete { indices } => {
            if indices.trim().is_empty() {
                return Err(ExpenseError::Validation("No input provided".into()));
            }

            let targets = parse_index_list(&indices, ledger.len());
            if targets.is_empty() {
                return Err(ExpenseError::Validation("No valid indices provided".into()));
            }

            let deleted = ledger.delete_indices(&targets)?;
            println!("{} expense(s) deleted", deleted);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ExpenseRepository;
    use std::fs;
    use tempfile::TempDir;

    fn ledger(temp_dir: &TempDir) -> Ledger {
        Ledger::open(ExpenseRepository::new(temp_dir.path().join("expenses.txt"))).unwrap()
    }

    fn add(date: &str, category: &str, amount: &str) -> ExpenseCommands {
        ExpenseCommands::Add {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
        }
    }

    #[test]
    fn test_add_persists_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = ledger(&temp_dir);
        let settings = Settings::default();

        handle_expense_command(&mut ledger, &settings, add("10-02-2024", "Bus", "30")).unwrap();
        handle_expense_command(&mut ledger, &settings, add("01-02-2024", "Food", "250")).unwrap();

        assert_eq!(
            fs::read_to_string(ledger.repository().path()).unwrap(),
            "01-02-2024, Food, 250\n10-02-2024, Bus, 30\n"
        );
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = ledger(&temp_dir);
        let settings = Settings::default();

        let cmd = add("2024-02-01", "Food", "10");
        let err = handle_expense_command(&mut ledger, &settings, cmd).unwrap_err();
        assert!(err.is_validation());

        let cmd = add("01-02-2024", "Food", "12.50");
        let err = handle_expense_command(&mut ledger, &settings, cmd).unwrap_err();
        assert!(err.is_validation());

        assert!(ledger.is_empty());
        assert!(!ledger.repository().path().exists());
    }

    #[test]
    fn test_delete_reports_invalid_input() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = ledger(&temp_dir);
        let settings = Settings::default();
        handle_expense_command(&mut ledger, &settings, add("01-02-2024", "Food", "250")).unwrap();

        let empty = ExpenseCommands::Delete { indices: "  ".into() };
        let err = handle_expense_command(&mut ledger, &settings, empty).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: No input provided");

        let invalid = ExpenseCommands::Delete { indices: "abc, , 99".into() };
        let err = handle_expense_command(&mut ledger, &settings, invalid).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: No valid indices provided");

        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_delete_removes_positions() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = ledger(&temp_dir);
        let settings = Settings::default();
        handle_expense_command(&mut ledger, &settings, add("01-02-2024", "Food", "250")).unwrap();
        handle_expense_command(&mut ledger, &settings, add("02-02-2024", "Bus", "30")).unwrap();

        let cmd = ExpenseCommands::Delete { indices: "1".into() };
        handle_expense_command(&mut ledger, &settings, cmd).unwrap();

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.expenses()[0].category, "Bus");
    }
}
