//! Crossterm-backed terminal surface

use std::{
    io::{self, Stdout, Write, stdout},
    time::{Duration, Instant},
};

use crossterm::{
    cursor::{self, MoveTo},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::{InputEvent, Surface};
use crate::consts::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::error::PongError;
use crate::sim::Position;

/// Columns and rows the board plus score/status/legend lines occupy
pub const REQUIRED_SIZE: (u16, u16) = (BOARD_WIDTH as u16 + 2, BOARD_HEIGHT as u16 + 5);

/// Raw-mode alternate-screen terminal
///
/// The terminal is restored by [`TerminalSurface::teardown`] or, failing
/// that, when the surface is dropped.
pub struct TerminalSurface {
    out: Stdout,
    active: bool,
}

impl TerminalSurface {
    /// Take over the terminal: raw mode, alternate screen, hidden cursor
    pub fn initialize() -> Result<Self, PongError> {
        let actual = terminal::size()?;
        if actual.0 < REQUIRED_SIZE.0 || actual.1 < REQUIRED_SIZE.1 {
            return Err(PongError::TerminalTooSmall {
                needed: REQUIRED_SIZE,
                actual,
            });
        }

        terminal::enable_raw_mode()?;
        // From here on Drop restores the terminal if anything fails
        let mut surface = Self {
            out: stdout(),
            active: true,
        };
        execute!(
            surface.out,
            EnterAlternateScreen,
            cursor::Hide,
            Clear(ClearType::All)
        )?;
        log::debug!("Terminal initialized ({}x{})", actual.0, actual.1);
        Ok(surface)
    }

    /// Give the terminal back; safe to call more than once
    pub fn teardown(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        let screen = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        let raw = terminal::disable_raw_mode();
        log::debug!("Terminal restored");
        screen.and(raw)
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        if let Err(err) = self.teardown() {
            log::error!("Failed to restore terminal: {err}");
        }
    }
}

impl Surface for TerminalSurface {
    fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<InputEvent>> {
        let start = Instant::now();
        loop {
            let remaining = timeout.saturating_sub(start.elapsed());
            if !event::poll(remaining)? {
                return Ok(None);
            }
            // Releases, repeats on some platforms, resizes and mouse events don't count
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(translate_key(key)));
                }
            }
            if remaining.is_zero() {
                return Ok(None);
            }
        }
    }

    fn draw_cell(&mut self, at: Position, text: &str) -> io::Result<()> {
        let (Ok(row), Ok(col)) = (u16::try_from(at.row), u16::try_from(at.col)) else {
            return Ok(());
        };
        queue!(self.out, MoveTo(col, row), Print(text))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Map a crossterm key event onto the keys the game understands
pub fn translate_key(key: KeyEvent) -> InputEvent {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            InputEvent::Interrupt
        }
        KeyCode::Char(c) => InputEvent::Char(c),
        KeyCode::Up => InputEvent::Up,
        KeyCode::Down => InputEvent::Down,
        _ => InputEvent::Other,
    }
}
