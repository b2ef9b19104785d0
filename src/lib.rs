//! Term Pong - A two-player Pong game for the terminal
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, game state)
//! - `renderer`: Turns per-tick render intents into cell draws on a surface
//! - `platform`: Display/input surface abstraction (crossterm and headless)
//! - `game`: Fixed-cadence loop tying input, simulation and rendering together
//! - `settings`: Presentation settings loaded from JSON

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::PongError;
pub use game::{Game, GameOutcome};
pub use settings::{Glyphs, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Board interior height (rows 1..=BOARD_HEIGHT)
    pub const BOARD_HEIGHT: i32 = 30;
    /// Board interior width (columns 1..=BOARD_WIDTH)
    pub const BOARD_WIDTH: i32 = 80;

    /// Number of segments in a paddle
    pub const PADDLE_LENGTH: usize = 4;
    /// Distance between a side wall and its paddle column
    pub const GAP_PADDLE_WALL: i32 = 2;

    /// Ball speed in board cells per tick
    pub const INITIAL_BALL_SPEED: f32 = 1.0;
    /// Serve direction in degrees (0 = right, 90 = down)
    pub const INITIAL_BALL_ANGLE: f32 = 35.0;

    /// Points needed to win a session
    pub const WIN_SCORE: u32 = 3;

    /// Default input poll timeout, which is also the tick period
    pub const DEFAULT_TICK_MS: u64 = 100;
    /// Slowest accepted tick period
    pub const MAX_TICK_MS: u64 = 10_000;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Project a speed along an angle (degrees) into (x, y) velocity components
///
/// Board rows grow downward, so positive angles below 180 move the ball down.
#[inline]
pub fn angle_to_velocity(speed: f32, degrees: f32) -> Vec2 {
    let theta = degrees_to_radians(degrees);
    Vec2::new(speed * theta.cos(), speed * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(35.0), 35.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-35.0), 325.0);
        assert_eq!(normalize_degrees(720.0 + 145.0), 145.0);
    }

    #[test]
    fn test_angle_to_velocity_serve() {
        let v = angle_to_velocity(1.0, 35.0);
        assert!((v.x - 0.819).abs() < 0.001);
        assert!((v.y - 0.574).abs() < 0.001);
    }

    #[test]
    fn test_angle_to_velocity_cardinal() {
        let right = angle_to_velocity(2.0, 0.0);
        assert!((right.x - 2.0).abs() < 1e-6 && right.y.abs() < 1e-6);

        let down = angle_to_velocity(1.0, 90.0);
        assert!(down.x.abs() < 1e-6 && (down.y - 1.0).abs() < 1e-6);
    }
}
