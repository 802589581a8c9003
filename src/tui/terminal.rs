//! Terminal lifecycle for the interactive controller
//!
//! Raw mode and the alternate screen are entered once at start and always
//! left again, including from a panic.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::info;

use crate::config::settings::Settings;
use crate::services::Ledger;

use super::app::{App, ExitStatus};
use super::event::EventHandler;
use super::handler::handle_event;

/// The crossterm-backed terminal the controller draws on
pub type ExpenseTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Switch to raw mode on the alternate screen
pub fn init_terminal() -> Result<ExpenseTerminal> {
    let previous_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous_hook(info);
    }));

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;

    Ok(Terminal::new(CrosstermBackend::new(io::stdout()))?)
}

/// Leave the alternate screen and raw mode
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the interactive controller until the user exits
///
/// The terminal is restored even when drawing or reading input fails.
pub fn run_tui(ledger: &mut Ledger, settings: &Settings) -> Result<ExitStatus> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, ledger, settings);
    restore_terminal()?;
    result
}

fn event_loop(
    terminal: &mut ExpenseTerminal,
    ledger: &mut Ledger,
    settings: &Settings,
) -> Result<ExitStatus> {
    let mut app = App::new(ledger, settings);
    let events = EventHandler::new();
    info!("tui started");

    loop {
        // Size is re-read every frame; only the menu and delete flow enforce it
        terminal.draw(|frame| {
            let area = frame.area();
            app.resize(area.width, area.height);
            app.check_terminal_size();
            super::views::render(frame, &app);
        })?;

        let event = events.next()?;
        handle_event(&mut app, event);

        if app.should_quit {
            break;
        }
    }

    Ok(app.exit_status)
}
