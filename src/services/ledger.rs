//! Ledger service
//!
//! The ledger owns the in-memory expense list for the lifetime of the process
//! and keeps it consistent with the expense file: every mutation re-sorts (for
//! additions) and rewrites the file before returning.

use tracing::{info, warn};

use crate::error::ExpenseResult;
use crate::models::{sort_by_date, Expense};
use crate::storage::ExpenseRepository;

/// Owned expense list plus the repository it is persisted through
#[derive(Debug)]
pub struct Ledger {
    repository: ExpenseRepository,
    expenses: Vec<Expense>,
    /// Set when the last write failed and memory is ahead of the file
    dirty: bool,
}

impl Ledger {
    /// Open a ledger, loading whatever the repository holds
    pub fn open(repository: ExpenseRepository) -> ExpenseResult<Self> {
        let expenses = repository.load()?;
        info!(
            path = %repository.path().display(),
            count = expenses.len(),
            "opened ledger"
        );
        Ok(Self {
            repository,
            expenses,
            dirty: false,
        })
    }

    /// All expenses, ascending by date
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether there are no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Whether memory holds changes the file doesn't
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The repository backing this ledger
    pub fn repository(&self) -> &ExpenseRepository {
        &self.repository
    }

    /// Append an expense, restore date order and persist
    ///
    /// If the write fails the expense stays in memory, the ledger is marked
    /// dirty and the error is returned.
    pub fn add(&mut self, expense: Expense) -> ExpenseResult<()> {
        info!(
            date = %expense.date_string(),
            category = %expense.category,
            amount = %expense.amount,
            "adding expense"
        );
        self.expenses.push(expense);
        sort_by_date(&mut self.expenses);
        self.persist()
    }

    /// Remove the expenses at the given 0-based indices and persist
    ///
    /// Indices are deduplicated, out-of-range ones ignored, and removal runs
    /// from the highest index down so earlier removals don't shift later ones.
    /// Returns how many expenses were removed; nothing is written when that
    /// is zero.
    pub fn delete_indices(&mut self, indices: &[usize]) -> ExpenseResult<usize> {
        let mut targets: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.expenses.len())
            .collect();
        targets.sort_unstable_by(|a, b| b.cmp(a));
        targets.dedup();

        if targets.is_empty() {
            return Ok(0);
        }

        for &index in &targets {
            self.expenses.remove(index);
        }

        info!(count = targets.len(), "deleted expenses");
        self.persist()?;
        Ok(targets.len())
    }

    /// Rewrite the file if an earlier save failed
    pub fn flush(&mut self) -> ExpenseResult<()> {
        if self.dirty {
            self.persist()?;
        }
        Ok(())
    }

    fn persist(&mut self) -> ExpenseResult<()> {
        match self.repository.save(&self.expenses) {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "failed to save expenses");
                self.dirty = true;
                Err(e)
            }
        }
    }
}

/// Parse a comma-separated list of 1-based positions
///
/// Tokens are trimmed; anything that isn't purely digits, or that falls
/// outside `1..=limit`, is dropped. The result is 0-based, deduplicated and
/// sorted descending, ready for [`Ledger::delete_indices`].
pub fn parse_index_list(input: &str, limit: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|token| token.parse::<usize>().ok())
        .filter_map(|position| position.checked_sub(1))
        .filter(|&index| index < limit)
        .collect();

    indices.sort_unstable_by(|a, b| b.cmp(a));
    indices.dedup();
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn expense(day: u32, category: &str) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            category,
            Amount::new(day as u64 * 10),
        )
    }

    fn open_empty(temp_dir: &TempDir) -> Ledger {
        Ledger::open(ExpenseRepository::new(temp_dir.path().join("expenses.txt"))).unwrap()
    }

    fn categories(ledger: &Ledger) -> Vec<&str> {
        ledger.expenses().iter().map(|e| e.category.as_str()).collect()
    }

    #[test]
    fn test_open_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = open_empty(&temp_dir);
        assert!(ledger.is_empty());
        assert!(!ledger.is_dirty());
    }

    #[test]
    fn test_add_keeps_memory_and_file_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = open_empty(&temp_dir);

        for (day, label) in [(20, "c"), (5, "a"), (12, "b"), (5, "a2")] {
            ledger.add(expense(day, label)).unwrap();

            let dates: Vec<_> = ledger.expenses().iter().map(|e| e.date).collect();
            let mut sorted = dates.clone();
            sorted.sort();
            assert_eq!(dates, sorted);

            let reloaded = ledger.repository().load().unwrap();
            assert_eq!(reloaded, ledger.expenses());
        }

        // equal dates keep insertion order
        assert_eq!(categories(&ledger), vec!["a", "a2", "b", "c"]);
    }

    #[test]
    fn test_delete_positions_two_and_four_of_five() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = open_empty(&temp_dir);
        for (day, label) in [(1, "one"), (2, "two"), (3, "three"), (4, "four"), (5, "five")] {
            ledger.add(expense(day, label)).unwrap();
        }

        let indices = parse_index_list("2, 4", ledger.len());
        assert_eq!(indices, vec![3, 1]);

        let deleted = ledger.delete_indices(&indices).unwrap();
        assert_eq!(deleted, 2);
        assert_eq!(categories(&ledger), vec!["one", "three", "five"]);
        assert_eq!(
            fs::read_to_string(ledger.repository().path()).unwrap(),
            "01-01-2024, one, 10\n03-01-2024, three, 30\n05-01-2024, five, 50\n"
        );
    }

    #[test]
    fn test_delete_nothing_valid_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = open_empty(&temp_dir);
        for day in 1..=3 {
            ledger.add(expense(day, "x")).unwrap();
        }
        fs::remove_file(ledger.repository().path()).unwrap();

        let indices = parse_index_list("abc, , 99", ledger.len());
        assert!(indices.is_empty());
        assert_eq!(ledger.delete_indices(&indices).unwrap(), 0);
        assert_eq!(ledger.len(), 3);
        assert!(!ledger.repository().path().exists());
    }

    #[test]
    fn test_delete_indices_tolerates_unsorted_duplicates() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = open_empty(&temp_dir);
        for (day, label) in [(1, "a"), (2, "b"), (3, "c")] {
            ledger.add(expense(day, label)).unwrap();
        }

        assert_eq!(ledger.delete_indices(&[0, 2, 0, 7]).unwrap(), 2);
        assert_eq!(categories(&ledger), vec!["b"]);
    }

    #[test]
    fn test_failed_save_marks_dirty_and_flush_recovers() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");
        let mut ledger = Ledger::open(ExpenseRepository::new(path.clone())).unwrap();

        let blocker = temp_dir.path().join("expenses.txt.tmp");
        fs::create_dir(&blocker).unwrap();

        assert!(ledger.add(expense(1, "food")).is_err());
        assert!(ledger.is_dirty());
        assert_eq!(ledger.len(), 1);

        fs::remove_dir(&blocker).unwrap();
        ledger.flush().unwrap();
        assert!(!ledger.is_dirty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "01-01-2024, food, 10\n");
    }

    #[test]
    fn test_parse_index_list() {
        assert_eq!(parse_index_list("1,3,5", 5), vec![4, 2, 0]);
        assert_eq!(parse_index_list(" 3 , 3,1 ", 3), vec![2, 0]);
        assert_eq!(parse_index_list("0, -1, 2.0, 4", 3), Vec::<usize>::new());
        assert_eq!(parse_index_list("", 3), Vec::<usize>::new());
        assert_eq!(parse_index_list("2", 1), Vec::<usize>::new());
    }
}
