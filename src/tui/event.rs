//! Event handling for TUI.
//!
//! The dashboard has nothing to do between user actions, so events are read
//! with a blocking call: no polling thread, no tick timer.

use std::io;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

/// Application events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Keyboard input.
    Key(KeyEvent),
    /// Terminal resize (width, height).
    Resize(u16, u16),
    /// Anything else the terminal reports (focus, paste, mouse).
    Other,
}

impl From<CrosstermEvent> for Event {
    fn from(evt: CrosstermEvent) -> Self {
        match evt {
            CrosstermEvent::Key(key) => Event::Key(key),
            CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
            _ => Event::Other,
        }
    }
}

/// Source of discrete input events.
pub trait EventSource {
    /// Blocks until the next event is available.
    fn next(&mut self) -> io::Result<Event>;
}

/// Reads events from the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next(&mut self) -> io::Result<Event> {
        event::read().map(Event::from)
    }
}
