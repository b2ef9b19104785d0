//! Platform abstraction layer
//!
//! The game only needs a handful of operations from its environment:
//! - Wait up to a timeout for one key press
//! - Draw or clear text at a board-local cell
//! - Flush once per tick
//!
//! Acquiring and releasing the underlying device is the implementor's job
//! (see [`terminal::TerminalSurface`]).

pub mod headless;
pub mod terminal;

use std::{io, time::Duration};

pub use headless::HeadlessSurface;
pub use terminal::TerminalSurface;

use crate::sim::Position;

/// A key press, reduced to what the game can distinguish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Char(char),
    Up,
    Down,
    /// Ctrl-C; raw mode swallows the signal so it arrives as a key
    Interrupt,
    Other,
}

/// Display/input surface the game loop drives
pub trait Surface {
    /// Block for at most `timeout` waiting for a key press
    ///
    /// Returns `Ok(None)` when the timeout expires with no key.
    fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<InputEvent>>;

    /// Write `text` starting at a board-local cell
    fn draw_cell(&mut self, at: Position, text: &str) -> io::Result<()>;

    /// Erase a previously drawn cell
    fn clear_cell(&mut self, at: Position) -> io::Result<()> {
        self.draw_cell(at, " ")
    }

    /// Make queued draws visible
    fn flush(&mut self) -> io::Result<()>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<InputEvent>> {
        (**self).poll_input(timeout)
    }

    fn draw_cell(&mut self, at: Position, text: &str) -> io::Result<()> {
        (**self).draw_cell(at, text)
    }

    fn clear_cell(&mut self, at: Position) -> io::Result<()> {
        (**self).clear_cell(at)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}
