//! In-memory surface with scripted input
//!
//! Used to drive the full game loop without a terminal.

use std::{
    collections::{BTreeMap, VecDeque},
    io,
    time::Duration,
};

use super::{InputEvent, Surface};
use crate::sim::Position;

#[derive(Debug, Default)]
pub struct HeadlessSurface {
    /// Poll results to hand out in order; `None` entries are timeouts
    script: VecDeque<Option<InputEvent>>,
    cells: BTreeMap<Position, String>,
    polls: usize,
    draws: usize,
    clears: usize,
    flushes: usize,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface that replays `script`, then times out on every later poll
    pub fn with_script(script: impl IntoIterator<Item = Option<InputEvent>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Text currently at a cell
    pub fn cell(&self, at: Position) -> Option<&str> {
        self.cells.get(&at).map(String::as_str)
    }

    /// A whole row as a string, blank-padded between drawn cells
    pub fn row_text(&self, row: i32) -> String {
        let mut line = String::new();
        let mut next_col = 0;
        for (at, text) in self.cells.range(Position::new(row, i32::MIN)..=Position::new(row, i32::MAX)) {
            while next_col < at.col {
                line.push(' ');
                next_col += 1;
            }
            line.push_str(text);
            next_col = at.col + text.chars().count() as i32;
        }
        line.trim_end().to_string()
    }

    pub fn polls(&self) -> usize {
        self.polls
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl Surface for HeadlessSurface {
    fn poll_input(&mut self, _timeout: Duration) -> io::Result<Option<InputEvent>> {
        self.polls += 1;
        Ok(self.script.pop_front().flatten())
    }

    fn draw_cell(&mut self, at: Position, text: &str) -> io::Result<()> {
        self.draws += 1;
        self.cells.insert(at, text.to_string());
        Ok(())
    }

    fn clear_cell(&mut self, at: Position) -> io::Result<()> {
        self.clears += 1;
        self.cells.remove(&at);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
