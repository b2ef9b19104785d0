//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick step only (no wall-clock time)
//! - No I/O, no rendering or platform dependencies
//! - State is owned by one `GameSession` and threaded through `tick`

pub mod collision;
pub mod state;
pub mod tick;

pub use state::{Ball, Direction, GamePhase, GameSession, Paddle, Position, Score, Side};
pub use tick::{GameEvent, RenderIntent, TickInput, TickReport, render_intents, tick};
