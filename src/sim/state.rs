//! Game state and core simulation types
//!
//! Everything the loop owns for one session lives in [`GameSession`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{angle_to_velocity, normalize_degrees};

/// A board-local cell coordinate
///
/// Interior rows are `1..=BOARD_HEIGHT` and interior columns `1..=BOARD_WIDTH`;
/// row/column 0 and `BOARD_HEIGHT + 1`/`BOARD_WIDTH + 1` are wall cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// Fixed paddle column for this side
    pub fn paddle_column(self) -> i32 {
        match self {
            Side::Left => GAP_PADDLE_WALL,
            Side::Right => BOARD_WIDTH - GAP_PADDLE_WALL,
        }
    }
}

/// Paddle movement intent for the current tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    #[default]
    Standby,
}

/// A vertical paddle made of `PADDLE_LENGTH` contiguous segments
///
/// Segments are ordered top to bottom and always share one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    side: Side,
    segments: [Position; PADDLE_LENGTH],
    pub direction: Direction,
}

impl Paddle {
    /// Create a paddle vertically centered on the board at the side's column
    pub fn generate(side: Side) -> Self {
        let top = BOARD_HEIGHT / 2 - PADDLE_LENGTH as i32 / 2 + 1;
        Self::at(side, top)
    }

    /// Create a paddle whose top segment sits on `top_row`
    ///
    /// `top_row` is clamped so the whole paddle stays inside the board.
    pub fn at(side: Side, top_row: i32) -> Self {
        let top_row = top_row.clamp(1, BOARD_HEIGHT - PADDLE_LENGTH as i32 + 1);
        let col = side.paddle_column();
        let segments = std::array::from_fn(|i| Position::new(top_row + i as i32, col));
        Self {
            side,
            segments,
            direction: Direction::Standby,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn segments(&self) -> &[Position; PADDLE_LENGTH] {
        &self.segments
    }

    pub fn column(&self) -> i32 {
        self.segments[0].col
    }

    /// Row of the topmost segment
    pub fn top(&self) -> i32 {
        self.segments[0].row
    }

    /// Row of the bottommost segment
    pub fn bottom(&self) -> i32 {
        self.segments[PADDLE_LENGTH - 1].row
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Move one row in the current direction, then fall back to standby
    ///
    /// Movement is all-or-nothing: at a boundary no segment moves.
    pub fn advance(&mut self) {
        let step = match self.direction {
            Direction::Up if self.top() > 1 => -1,
            Direction::Down if self.bottom() < BOARD_HEIGHT => 1,
            _ => 0,
        };
        if step != 0 {
            for segment in &mut self.segments {
                segment.row += step;
            }
        }
        self.direction = Direction::Standby;
    }
}

/// The ball
///
/// Position is kept as a float but is rounded to whole cells after every
/// advance, so collision checks compare exact cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    speed: f32,
    /// Direction of travel in degrees, normalized to [0, 360)
    angle: f32,
}

impl Ball {
    /// Ball at the board center with the serve speed and angle
    pub fn generate() -> Self {
        Self::new(
            Position::new(BOARD_HEIGHT / 2, BOARD_WIDTH / 2),
            INITIAL_BALL_SPEED,
            INITIAL_BALL_ANGLE,
        )
    }

    pub fn new(at: Position, speed: f32, angle: f32) -> Self {
        Self {
            pos: Vec2::new(at.col as f32, at.row as f32),
            speed,
            angle: normalize_degrees(angle),
        }
    }

    /// Current cell
    pub fn position(&self) -> Position {
        Position::new(self.pos.y.round() as i32, self.pos.x.round() as i32)
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Velocity derived from speed and angle
    pub fn velocity(&self) -> Vec2 {
        angle_to_velocity(self.speed, self.angle)
    }

    /// Step one tick along the current angle, snapping to the nearest cell
    pub fn advance(&mut self) {
        self.pos = (self.pos + self.velocity()).round();
    }

    /// Mirror the vertical component (top/bottom wall)
    pub fn reflect_vertical(&mut self) {
        self.angle = normalize_degrees(360.0 - self.angle);
    }

    /// Mirror the horizontal component (paddle)
    pub fn reflect_horizontal(&mut self) {
        self.angle = normalize_degrees(180.0 - self.angle);
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// The side that reached `WIN_SCORE`, if any
    pub fn winner(&self) -> Option<Side> {
        if self.left >= WIN_SCORE {
            Some(Side::Left)
        } else if self.right >= WIN_SCORE {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Simulation frozen until resumed
    Paused,
    /// Session over; `winner` is `None` when a player quit
    Finished { winner: Option<Side> },
}

/// Complete state of one game session, owned by the loop
#[derive(Debug, Clone)]
pub struct GameSession {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub phase: GamePhase,
    /// A point was scored last tick; reset before simulating the next one
    pub pending_reset: bool,
    /// Board walls have been emitted as a render intent
    pub board_drawn: bool,
    /// Simulated ticks (paused ticks are not counted)
    pub ticks: u64,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            left: Paddle::generate(Side::Left),
            right: Paddle::generate(Side::Right),
            ball: Ball::generate(),
            score: Score::default(),
            phase: GamePhase::Running,
            pending_reset: false,
            board_drawn: false,
            ticks: 0,
        }
    }

    /// Return ball and paddles to their canonical start; the score is kept
    pub fn reset_positions(&mut self) {
        self.left = Paddle::generate(Side::Left);
        self.right = Paddle::generate(Side::Right);
        self.ball = Ball::generate();
        self.pending_reset = false;
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, GamePhase::Finished { .. })
    }
}
