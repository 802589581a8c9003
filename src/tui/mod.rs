//! Terminal User Interface module
//!
//! The interactive controller: a main menu with add and delete flows,
//! drawn with ratatui over crossterm and driven by blocking key reads.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;
pub mod theme;

pub use app::{App, ExitStatus};
pub use terminal::run_tui;
