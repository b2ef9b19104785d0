//! Collision detection and response on the cell grid
//!
//! All checks compare exact cells: the ball is rounded to whole cells every
//! advance, and with speed 1 it moves at most one cell per axis per tick, so
//! it always lands on a wall row or paddle neighbor before it could pass it.
//! Response only ever changes the ball's angle, never its speed.

use super::state::{Ball, Paddle, Score, Side};
use crate::consts::*;

/// Reflect off the top or bottom wall when the ball sits on the first or last row
///
/// Returns true when the ball bounced.
pub fn top_bottom_wall(ball: &mut Ball) -> bool {
    let row = ball.position().row;
    if row == 1 || row == BOARD_HEIGHT {
        ball.reflect_vertical();
        return true;
    }
    false
}

/// Reflect off a paddle when the ball is directly in front of one of its segments
///
/// "In front" means one column right of a left-paddle segment or one column
/// left of a right-paddle segment, on the same row. A row holds at most one
/// segment per paddle and the two paddles are far apart, so at most one
/// segment can match per tick. Returns the side whose paddle was hit.
pub fn paddle(ball: &mut Ball, left: &Paddle, right: &Paddle) -> Option<Side> {
    let at = ball.position();

    let hit = if in_front_of(left, at.row, at.col, 1) {
        Some(Side::Left)
    } else if in_front_of(right, at.row, at.col, -1) {
        Some(Side::Right)
    } else {
        None
    };

    if hit.is_some() {
        ball.reflect_horizontal();
    }
    hit
}

fn in_front_of(paddle: &Paddle, row: i32, col: i32, offset: i32) -> bool {
    paddle
        .segments()
        .iter()
        .any(|segment| segment.row == row && segment.col + offset == col)
}

/// Award a point when the ball reaches a scoring column
///
/// Column 1 is behind the left paddle and scores for the right side; column
/// `BOARD_WIDTH` scores for the left side. Returns the side that scored.
pub fn side_wall(ball: &Ball, score: &mut Score) -> Option<Side> {
    let scorer = match ball.position().col {
        1 => Some(Side::Right),
        BOARD_WIDTH => Some(Side::Left),
        _ => None,
    };
    if let Some(side) = scorer {
        score.award(side);
    }
    scorer
}
