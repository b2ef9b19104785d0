//! Fixed-cadence game loop
//!
//! Each iteration blocks on one input poll (which is what paces the game),
//! runs one simulation tick and presents the resulting render intents.

use std::time::Duration;

use crate::error::PongError;
use crate::platform::{InputEvent, Surface};
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::sim::{Direction, GameEvent, GamePhase, GameSession, Score, Side, TickInput, tick};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    /// `None` when a player quit before anyone won
    pub winner: Option<Side>,
    pub score: Score,
    pub ticks: u64,
}

/// Decode one poll result into tick input
///
/// Letters are case-folded. Anything unrecognized, including a timeout,
/// leaves both paddles on standby so releasing a key stops the paddle at once.
pub fn interpret(event: Option<InputEvent>) -> TickInput {
    let mut input = TickInput::default();
    match event {
        Some(InputEvent::Char(c)) => match c.to_ascii_lowercase() {
            'w' => input.left = Direction::Up,
            's' => input.left = Direction::Down,
            'p' => input.pause = true,
            'q' => input.quit = true,
            _ => {}
        },
        Some(InputEvent::Up) => input.right = Direction::Up,
        Some(InputEvent::Down) => input.right = Direction::Down,
        Some(InputEvent::Interrupt) => input.quit = true,
        Some(InputEvent::Other) | None => {}
    }
    input
}

/// One session on one surface
pub struct Game<S: Surface> {
    surface: S,
    session: GameSession,
    renderer: Renderer,
    tick_interval: Duration,
}

impl<S: Surface> Game<S> {
    pub fn new(surface: S, settings: &Settings) -> Self {
        Self {
            surface,
            session: GameSession::new(),
            renderer: Renderer::new(settings),
            tick_interval: settings.tick_interval(),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Run until someone wins or quits
    pub fn run(&mut self) -> Result<GameOutcome, PongError> {
        log::info!("Session started (tick {:?})", self.tick_interval);
        loop {
            if let Some(outcome) = self.step()? {
                return Ok(outcome);
            }
        }
    }

    /// Poll, tick and present once; returns the outcome when the session ends
    pub fn step(&mut self) -> Result<Option<GameOutcome>, PongError> {
        let event = self.surface.poll_input(self.tick_interval)?;
        let input = interpret(event);

        let report = tick(&mut self.session, &input);
        for event in &report.events {
            log_event(event, &self.session.score);
        }
        self.renderer.present(&mut self.surface, &report.intents)?;

        match self.session.phase {
            GamePhase::Finished { winner } => {
                let outcome = GameOutcome {
                    winner,
                    score: self.session.score,
                    ticks: self.session.ticks,
                };
                log::info!(
                    "Session over after {} ticks: {}-{}",
                    outcome.ticks,
                    outcome.score.left,
                    outcome.score.right
                );
                Ok(Some(outcome))
            }
            GamePhase::Running | GamePhase::Paused => Ok(None),
        }
    }
}

fn log_event(event: &GameEvent, score: &Score) {
    match event {
        GameEvent::WallBounce => log::debug!("Ball bounced off a wall"),
        GameEvent::PaddleBounce(side) => log::debug!("Ball bounced off the {} paddle", side.as_str()),
        GameEvent::Scored(side) => log::info!(
            "Point to {} ({}-{})",
            side.as_str(),
            score.left,
            score.right
        ),
        GameEvent::Reset => log::debug!("Ball and paddles reset"),
        GameEvent::Paused => log::debug!("Paused"),
        GameEvent::Resumed => log::debug!("Resumed"),
        GameEvent::Quit => log::info!("Quit requested"),
        GameEvent::Won(side) => log::info!("{} player wins", side.as_str()),
    }
}
