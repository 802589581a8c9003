//! Storage layer for the expense tracker
//!
//! Persists expenses to a plain text file, one line per expense, using
//! atomic replace-on-write.

pub mod expenses;
pub mod file_io;
pub mod line_format;

pub use expenses::ExpenseRepository;
pub use file_io::{read_text, write_text_atomic};
pub use line_format::{decode_line, encode_line};
