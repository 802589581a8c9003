//! Expense Tracker - terminal-based personal expense tracker
//!
//! Records dated, categorised expenses in a plain-text file and offers an
//! interactive menu for adding and deleting them, plus a small set of
//! non-interactive commands over the same data.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense, amount and date handling
//! - `storage`: The line-oriented expense file
//! - `services`: The ledger every front end goes through
//! - `display`: Plain-text formatting
//! - `cli`: Non-interactive commands
//! - `tui`: The interactive controller
//! - `logging`: File-backed tracing setup
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{ExpensePaths, Settings};
//! use expense_tracker::services::Ledger;
//! use expense_tracker::storage::ExpenseRepository;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let repository = ExpenseRepository::new(settings.resolve_data_file(&paths, None));
//! let ledger = Ledger::open(repository)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::ExpenseError;
