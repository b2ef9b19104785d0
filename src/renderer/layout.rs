//! Where things go on screen
//!
//! Intents are rasterized into one character per cell so frames can be
//! compared cell by cell.

use std::collections::BTreeMap;

use crate::consts::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::settings::Glyphs;
use crate::sim::{Position, RenderIntent, Side};

pub type CellMap = BTreeMap<Position, char>;

/// Row of the score line, just under the bottom wall
pub const SCORE_ROW: i32 = BOARD_HEIGHT + 2;
/// Row of the pause/result banner
pub const STATUS_ROW: i32 = BOARD_HEIGHT + 3;
/// Row of the key legend
pub const LEGEND_ROW: i32 = BOARD_HEIGHT + 4;

pub const CONTROLS: &str = "w/s: left paddle   up/down: right paddle   p: pause   q: quit";

/// Write `text` rightward from `at`, one char per column
pub fn put_text(cells: &mut CellMap, at: Position, text: &str) {
    for (i, ch) in text.chars().enumerate() {
        cells.insert(Position::new(at.row, at.col + i as i32), ch);
    }
}

/// Like [`put_text`] but drops any char that would land outside the board interior
///
/// Walls are drawn once and never diffed, so an entity must never own a wall cell.
pub fn put_board_text(cells: &mut CellMap, at: Position, text: &str) {
    if !(1..=BOARD_HEIGHT).contains(&at.row) {
        return;
    }
    for (i, ch) in text.chars().enumerate() {
        let col = at.col + i as i32;
        if (1..=BOARD_WIDTH).contains(&col) {
            cells.insert(Position::new(at.row, col), ch);
        }
    }
}

/// Start cell that centers `text` across the full board width (walls included)
pub fn centered(row: i32, text: &str) -> Position {
    let span = BOARD_WIDTH + 2;
    let len = text.chars().count() as i32;
    Position::new(row, ((span - len) / 2).max(0))
}

pub fn score_text(left: u32, right: u32) -> String {
    format!("{} {left}  -  {right} {}", Side::Left.as_str(), Side::Right.as_str())
}

/// Wall ring around the interior; multi-char glyphs use their first char
pub fn wall_cells(glyph: &str) -> CellMap {
    let mut cells = CellMap::new();
    let Some(ch) = glyph.chars().next() else {
        return cells;
    };
    for row in 0..=BOARD_HEIGHT + 1 {
        for col in 0..=BOARD_WIDTH + 1 {
            if row == 0 || row == BOARD_HEIGHT + 1 || col == 0 || col == BOARD_WIDTH + 1 {
                cells.insert(Position::new(row, col), ch);
            }
        }
    }
    cells
}

/// Rasterize the per-tick (moving) intents; `Board` is handled separately
pub fn rasterize(intents: &[RenderIntent], glyphs: &Glyphs) -> CellMap {
    let mut cells = CellMap::new();
    for intent in intents {
        match intent {
            RenderIntent::Board => {}
            RenderIntent::Paddle { segments, .. } => {
                for segment in segments {
                    put_board_text(&mut cells, *segment, &glyphs.paddle);
                }
            }
            RenderIntent::Ball { at } => put_board_text(&mut cells, *at, &glyphs.ball),
            RenderIntent::Score { left, right } => {
                let text = score_text(*left, *right);
                put_text(&mut cells, centered(SCORE_ROW, &text), &text);
            }
            RenderIntent::Status(text) => put_text(&mut cells, centered(STATUS_ROW, text), text),
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameSession;
    use crate::sim::render_intents;

    #[test]
    fn test_wall_ring() {
        let cells = wall_cells("#");
        let perimeter = 2 * (BOARD_WIDTH + 2) + 2 * BOARD_HEIGHT;
        assert_eq!(cells.len(), perimeter as usize);
        assert_eq!(cells.get(&Position::new(0, 0)), Some(&'#'));
        assert_eq!(cells.get(&Position::new(BOARD_HEIGHT + 1, BOARD_WIDTH + 1)), Some(&'#'));
        assert_eq!(cells.get(&Position::new(1, 1)), None);
    }

    #[test]
    fn test_rasterize_session() {
        let mut session = GameSession::new();
        let intents = render_intents(&mut session);
        let cells = rasterize(&intents, &Glyphs::default());

        for row in 14..=17 {
            assert_eq!(cells.get(&Position::new(row, 2)), Some(&'|'));
            assert_eq!(cells.get(&Position::new(row, 78)), Some(&'|'));
        }
        assert_eq!(cells.get(&Position::new(15, 40)), Some(&'o'));

        let text = score_text(0, 0);
        let start = centered(SCORE_ROW, &text);
        assert_eq!(cells.get(&start), Some(&'l'));
        // Walls never come from rasterize
        assert_eq!(cells.get(&Position::new(0, 0)), None);
    }

    #[test]
    fn test_wide_glyphs_span_columns() {
        let glyphs = Glyphs {
            paddle: "[]".to_string(),
            ..Glyphs::default()
        };
        let mut cells = CellMap::new();
        put_text(&mut cells, Position::new(5, 2), &glyphs.paddle);
        assert_eq!(cells.get(&Position::new(5, 2)), Some(&'['));
        assert_eq!(cells.get(&Position::new(5, 3)), Some(&']'));
    }

    #[test]
    fn test_wide_glyphs_clip_at_walls() {
        let glyphs = Glyphs {
            ball: "()".to_string(),
            paddle: "<==>".to_string(),
            ..Glyphs::default()
        };
        let intents = [
            RenderIntent::Ball {
                at: Position::new(10, BOARD_WIDTH),
            },
            RenderIntent::Paddle {
                side: Side::Right,
                segments: *crate::sim::Paddle::generate(Side::Right).segments(),
            },
        ];
        let cells = rasterize(&intents, &glyphs);
        let walls = wall_cells("#");

        assert_eq!(cells.get(&Position::new(10, BOARD_WIDTH)), Some(&'('));
        assert_eq!(cells.get(&Position::new(14, BOARD_WIDTH)), Some(&'='));
        assert!(cells.keys().all(|at| !walls.contains_key(at)));
    }

    #[test]
    fn test_centered() {
        assert_eq!(centered(1, "ab"), Position::new(1, 40));
        assert_eq!(centered(1, &"x".repeat(200)).col, 0);
    }
}
