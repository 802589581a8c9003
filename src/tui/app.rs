//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Exactly one screen is active at a time; the flows are entered from the
//! main menu and always return to it.

use tracing::{info, warn};

use crate::config::settings::Settings;
use crate::services::Ledger;

use super::dialogs::add_expense::AddExpenseState;
use super::dialogs::delete_expenses::DeleteExpensesState;
use super::layout::{fits, visible_rows, MIN_WIDTH};
use super::theme::Theme;

/// Which screen is currently active
#[derive(Debug, Clone)]
pub enum Screen {
    MainMenu,
    AddExpense(AddExpenseState),
    DeleteExpenses(DeleteExpensesState),
    /// The terminal is too narrow; waiting for a key before exiting
    TooSmall,
}

/// How the controller ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// The user chose Exit
    Normal,
    /// The terminal was this many columns wide, below the minimum
    TerminalTooSmall { width: u16 },
}

/// Main application state
pub struct App<'a> {
    /// The expense list and its backing file
    pub ledger: &'a mut Ledger,

    /// Application settings
    pub settings: &'a Settings,

    pub theme: Theme,

    /// Active screen
    pub screen: Screen,

    /// Last known terminal size
    pub width: u16,
    pub height: u16,

    /// Whether the app should quit
    pub should_quit: bool,

    pub exit_status: ExitStatus,
}

impl<'a> App<'a> {
    /// Create a new App instance on the main menu
    pub fn new(ledger: &'a mut Ledger, settings: &'a Settings) -> Self {
        Self {
            ledger,
            settings,
            theme: Theme::default(),
            screen: Screen::MainMenu,
            width: 0,
            height: 0,
            should_quit: false,
            exit_status: ExitStatus::Normal,
        }
    }

    /// Record the terminal size seen at the start of a frame
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Switch to the too-small screen if the terminal is too narrow
    ///
    /// Only checked on the main menu and the delete flow, which are the
    /// screens that lay out against the full width. Returns whether the
    /// terminal fits.
    pub fn check_terminal_size(&mut self) -> bool {
        if fits(self.width) {
            return true;
        }

        if matches!(self.screen, Screen::MainMenu | Screen::DeleteExpenses(_)) {
            warn!(width = self.width, min_width = MIN_WIDTH, "terminal too small");
            self.screen = Screen::TooSmall;
        }
        !matches!(self.screen, Screen::TooSmall)
    }

    /// Currency symbol used for display
    pub fn currency(&self) -> &str {
        &self.settings.currency_symbol
    }

    /// Start the add expense flow
    pub fn open_add(&mut self) {
        self.screen = Screen::AddExpense(AddExpenseState::new(&self.settings.currency_symbol));
    }

    /// Start the delete flow, sized to the current terminal height
    pub fn open_delete(&mut self) {
        let state = DeleteExpensesState::new(self.ledger.len(), visible_rows(self.height));
        self.screen = Screen::DeleteExpenses(state);
    }

    /// Return to the main menu
    pub fn back_to_menu(&mut self) {
        self.screen = Screen::MainMenu;
    }

    /// Request application quit
    pub fn quit(&mut self) {
        self.quit_with(ExitStatus::Normal);
    }

    /// Request quit with the given status
    pub fn quit_with(&mut self, status: ExitStatus) {
        info!(?status, "leaving tui");
        self.exit_status = status;
        self.should_quit = true;
    }
}
