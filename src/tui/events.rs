//! TUI event handling with crossterm.
//!
//! Polls the terminal for input and surfaces key presses to the main
//! loop. Only `Press` events are forwarded; repeat and release events
//! (reported by some terminals) are dropped so a held key does not
//! double-type, and mouse/resize events are ignored here because the
//! loop redraws every frame anyway.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use thiserror::Error;

/// Error type for event handling.
#[derive(Debug, Error)]
pub enum EventError {
    /// I/O error while polling or reading terminal events.
    #[error("event I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Polls the terminal for keyboard input.
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    /// Create a new event handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Wait up to `timeout` for a key press.
    ///
    /// Returns `Ok(None)` when the timeout elapses or a non-key event
    /// arrives.
    ///
    /// # Errors
    ///
    /// Returns `EventError::Io` if the terminal cannot be polled or read.
    pub fn poll(&self, timeout: Duration) -> Result<Option<KeyEvent>, EventError> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            _ => Ok(None),
        }
    }
}
