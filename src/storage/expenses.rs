//! Expense repository for the line-oriented text file
//!
//! Manages loading and saving expenses to the expense file.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ExpenseError;
use crate::models::{sort_by_date, Expense};

use super::file_io::{read_text, write_text_atomic};
use super::line_format::{decode_line, encode_all};

/// Repository translating between expenses and the backing file
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load expenses sorted by date
    ///
    /// A missing file is an empty list. Blank lines are skipped; any other
    /// line that fails to decode aborts the load with
    /// [`ExpenseError::Corrupt`].
    pub fn load(&self) -> Result<Vec<Expense>, ExpenseError> {
        let Some(contents) = read_text(&self.path)? else {
            debug!(path = %self.path.display(), "expense file not found, starting empty");
            return Ok(Vec::new());
        };

        let mut expenses = Vec::new();
        for (index, raw) in contents.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            let expense = decode_line(line).map_err(|reason| {
                warn!(
                    path = %self.path.display(),
                    line = index + 1,
                    %reason,
                    "corrupt expense line"
                );
                ExpenseError::Corrupt {
                    line: index + 1,
                    reason,
                }
            })?;
            expenses.push(expense);
        }

        sort_by_date(&mut expenses);
        debug!(path = %self.path.display(), count = expenses.len(), "loaded expenses");
        Ok(expenses)
    }

    /// Overwrite the backing file with `expenses`, in the given order
    pub fn save(&self, expenses: &[Expense]) -> Result<(), ExpenseError> {
        write_text_atomic(&self.path, &encode_all(expenses))?;
        debug!(path = %self.path.display(), count = expenses.len(), "saved expenses");
        Ok(())
    }
}
