//! Fixed-step simulation tick
//!
//! One call advances the session by exactly one step and reports what
//! happened plus what should be on screen afterwards.

use super::collision;
use super::state::{Direction, GamePhase, GameSession, Position, Score, Side};
use crate::consts::PADDLE_LENGTH;

/// Input commands for a single tick, already decoded from a key press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left paddle intent (Standby when no key targets it)
    pub left: Direction,
    /// Right paddle intent
    pub right: Direction,
    /// Pause toggle
    pub pause: bool,
    /// End the session
    pub quit: bool,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallBounce,
    PaddleBounce(Side),
    Scored(Side),
    /// Ball and paddles returned to the start after a point
    Reset,
    Paused,
    Resumed,
    Quit,
    Won(Side),
}

/// What the display should show after a tick
#[derive(Debug, Clone, PartialEq)]
pub enum RenderIntent {
    /// Static walls; only emitted on the first tick of a session
    Board,
    Paddle {
        side: Side,
        segments: [Position; PADDLE_LENGTH],
    },
    Ball { at: Position },
    Score { left: u32, right: u32 },
    /// Banner text (pause notice, result)
    Status(String),
}

/// Output of one tick
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
    pub intents: Vec<RenderIntent>,
}

impl TickReport {
    /// Side that scored this tick, if any
    pub fn scored(&self) -> Option<Side> {
        self.events.iter().find_map(|event| match event {
            GameEvent::Scored(side) => Some(*side),
            _ => None,
        })
    }
}

/// Advance the session by one tick
///
/// Order within a tick: deferred reset from last tick's point, paddle
/// intents and movement, wall and paddle reflection against the ball's
/// current cell, ball advance, scoring check, render intents, and finally
/// the terminal-state decision. A finished session is never mutated.
pub fn tick(session: &mut GameSession, input: &TickInput) -> TickReport {
    let mut report = TickReport::default();

    if session.is_finished() {
        report.intents = render_intents(session);
        return report;
    }

    // Reset deferred from the scoring tick so that tick still showed the ball at the wall
    if session.pending_reset {
        session.reset_positions();
        report.events.push(GameEvent::Reset);
    }

    if input.pause {
        match session.phase {
            GamePhase::Running => {
                session.phase = GamePhase::Paused;
                report.events.push(GameEvent::Paused);
            }
            GamePhase::Paused => {
                session.phase = GamePhase::Running;
                report.events.push(GameEvent::Resumed);
            }
            GamePhase::Finished { .. } => {}
        }
    }

    if session.phase == GamePhase::Running {
        step(session, input, &mut report);
    }

    if input.quit {
        session.phase = GamePhase::Finished {
            winner: session.score.winner(),
        };
        report.events.push(GameEvent::Quit);
    } else if let Some(winner) = session.score.winner() {
        session.phase = GamePhase::Finished {
            winner: Some(winner),
        };
        report.events.push(GameEvent::Won(winner));
    }

    report.intents = render_intents(session);
    report
}

/// One simulation step while running
fn step(session: &mut GameSession, input: &TickInput, report: &mut TickReport) {
    session.ticks += 1;

    session.left.set_direction(input.left);
    session.right.set_direction(input.right);
    session.left.advance();
    session.right.advance();

    // Reflections look at where the ball is now, before it moves
    if collision::top_bottom_wall(&mut session.ball) {
        report.events.push(GameEvent::WallBounce);
    }
    if let Some(side) = collision::paddle(&mut session.ball, &session.left, &session.right) {
        report.events.push(GameEvent::PaddleBounce(side));
    }

    session.ball.advance();

    if let Some(side) = collision::side_wall(&session.ball, &mut session.score) {
        session.pending_reset = true;
        report.events.push(GameEvent::Scored(side));
    }

    log::trace!(
        "tick {}: ball {:?} angle {:.1}, paddles {}/{}",
        session.ticks,
        session.ball.position(),
        session.ball.angle(),
        session.left.top(),
        session.right.top()
    );
}

/// Build this tick's render intents
///
/// The board is only included the first time; later ticks assume the
/// display keeps it.
pub fn render_intents(session: &mut GameSession) -> Vec<RenderIntent> {
    let mut intents = Vec::with_capacity(6);

    if !session.board_drawn {
        intents.push(RenderIntent::Board);
        session.board_drawn = true;
    }

    for paddle in [&session.left, &session.right] {
        intents.push(RenderIntent::Paddle {
            side: paddle.side(),
            segments: *paddle.segments(),
        });
    }
    intents.push(RenderIntent::Ball {
        at: session.ball.position(),
    });

    let Score { left, right } = session.score;
    intents.push(RenderIntent::Score { left, right });

    match session.phase {
        GamePhase::Running => {}
        GamePhase::Paused => {
            intents.push(RenderIntent::Status("PAUSED - press p to resume".to_string()));
        }
        GamePhase::Finished { winner: Some(side) } => {
            intents.push(RenderIntent::Status(format!("{} player wins!", side.as_str())));
        }
        GamePhase::Finished { winner: None } => {
            intents.push(RenderIntent::Status("Game abandoned".to_string()));
        }
    }

    intents
}
