//! Service layer for the expense tracker
//!
//! Business logic on top of the storage layer, shared by the CLI commands
//! and the interactive controller.

pub mod ledger;

pub use ledger::{parse_index_list, Ledger};
