use std::io;

use crossterm::event::{self, Event};

use super::view::Dialog;

/// Where the window reads its input from.
pub trait EventSource {
    /// Blocks until the next terminal event.
    fn next_event(&mut self) -> io::Result<Event>;

    /// Called when a modal dialog starts waiting to be dismissed.
    fn dialog_opened(&mut self, _dialog: &Dialog) {}
}

/// Reads events from the real terminal.
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        event::read()
    }
}
