//! Event handler for the TUI
//!
//! Routes key events to the active screen. Handling never fails: storage
//! errors are shown inline by the flow that hit them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::app::{App, ExitStatus, Screen};
use super::dialogs::add_expense::AddStep;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(width, height) => app.resize(width, height),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.screen {
        Screen::MainMenu => handle_main_menu_key(app, key),
        Screen::AddExpense(_) => handle_add_key(app, key),
        Screen::DeleteExpenses(_) => handle_delete_key(app, key),
        Screen::TooSmall => {
            let width = app.width;
            app.quit_with(ExitStatus::TerminalTooSmall { width })
        }
    }
}

/// Menu choices; anything else re-prompts
fn handle_main_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('1') => app.open_add(),
        KeyCode::Char('2') => app.open_delete(),
        KeyCode::Char('3') => app.quit(),
        other => debug!(?other, "ignored menu key"),
    }
}

fn handle_add_key(app: &mut App, key: KeyEvent) {
    let Screen::AddExpense(state) = &mut app.screen else {
        return;
    };

    // The key that acknowledges an error is consumed by it
    if state.error.is_some() {
        state.dismiss_error();
        return;
    }

    let step = state.step;
    if step == AddStep::Confirm {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.open_add(),
            _ => app.back_to_menu(),
        }
        return;
    }

    match key.code {
        KeyCode::Enter => {
            if let Some(expense) = state.submit_field() {
                let result = app.ledger.add(expense);
                state.record_outcome(result);
            }
        }
        KeyCode::Backspace => state.backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => state.insert(c),
        _ => {}
    }
}

fn handle_delete_key(app: &mut App, key: KeyEvent) {
    let Screen::DeleteExpenses(state) = &mut app.screen else {
        return;
    };

    // Any key after a message returns to the menu
    if !state.is_reading_input() {
        app.back_to_menu();
        return;
    }

    match key.code {
        KeyCode::Enter => state.submit(app.ledger),
        KeyCode::Backspace => state.input.backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.input.insert(c)
        }
        _ => {}
    }
}
