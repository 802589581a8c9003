//! Event handling for the TUI
//!
//! Input is read synchronously on the one thread of control: the controller
//! blocks until the user presses a key or the terminal is resized.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::io;

/// Terminal events the controller reacts to
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
}

/// Blocking source of terminal events
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    /// Create a new event handler
    pub fn new() -> Self {
        Self
    }

    /// Wait for the next key press or resize
    ///
    /// Key releases and repeats (reported on some platforms), mouse and
    /// focus events are skipped.
    pub fn next(&self) -> io::Result<Event> {
        loop {
            match event::read()? {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(Event::Key(key));
                }
                CrosstermEvent::Resize(width, height) => {
                    return Ok(Event::Resize(width, height));
                }
                _ => {}
            }
        }
    }
}
