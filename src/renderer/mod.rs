//! Terminal rendering module
//!
//! Reconciles each tick's render intents against the previous frame and
//! only touches cells that changed. Walls and the key legend are static:
//! drawn once when the board intent arrives and never diffed.

pub mod layout;

use std::io;

use crate::platform::Surface;
use crate::settings::{Glyphs, Settings};
use crate::sim::{Position, RenderIntent};
use layout::{CONTROLS, CellMap, LEGEND_ROW, centered, put_text, rasterize, wall_cells};

pub struct Renderer {
    glyphs: Glyphs,
    show_controls: bool,
    /// Dynamic cells shown after the last present
    previous: CellMap,
}

impl Renderer {
    pub fn new(settings: &Settings) -> Self {
        Self {
            glyphs: settings.glyphs.clone(),
            show_controls: settings.show_controls,
            previous: CellMap::new(),
        }
    }

    /// Draw one tick's intents and flush once
    pub fn present<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        intents: &[RenderIntent],
    ) -> io::Result<()> {
        if intents.contains(&RenderIntent::Board) {
            self.draw_static(surface)?;
        }

        let current = rasterize(intents, &self.glyphs);

        for at in self.previous.keys() {
            if !current.contains_key(at) {
                surface.clear_cell(*at)?;
            }
        }
        let mut buf = [0u8; 4];
        for (at, ch) in &current {
            if self.previous.get(at) != Some(ch) {
                surface.draw_cell(*at, ch.encode_utf8(&mut buf))?;
            }
        }

        self.previous = current;
        surface.flush()
    }

    fn draw_static<S: Surface + ?Sized>(&mut self, surface: &mut S) -> io::Result<()> {
        let mut cells = wall_cells(&self.glyphs.wall);
        if self.show_controls {
            put_text(&mut cells, centered(LEGEND_ROW, CONTROLS), CONTROLS);
        }
        let mut buf = [0u8; 4];
        for (at, ch) in &cells {
            surface.draw_cell(*at, ch.encode_utf8(&mut buf))?;
        }
        // Anything we thought was on screen under a fresh board is stale
        self.previous.retain(|at: &Position, _| !cells.contains_key(at));
        log::debug!("Board drawn ({} static cells)", cells.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::HeadlessSurface;
    use crate::consts::BOARD_WIDTH;
    use crate::sim::{Ball, GameSession, TickInput, tick};

    #[test]
    fn test_first_frame_draws_board_and_entities() {
        let mut surface = HeadlessSurface::new();
        let mut renderer = Renderer::new(&Settings::default());
        let mut session = GameSession::new();

        let report = tick(&mut session, &TickInput::default());
        renderer.present(&mut surface, &report.intents).unwrap();

        assert_eq!(surface.cell(Position::new(0, 0)), Some("#"));
        assert_eq!(surface.cell(Position::new(14, 2)), Some("|"));
        assert_eq!(surface.cell(Position::new(16, 41)), Some("o"));
        assert!(surface.row_text(LEGEND_ROW).contains("q: quit"));
        assert_eq!(surface.flushes(), 1);
    }

    #[test]
    fn test_moving_ball_erases_old_cell() {
        let mut surface = HeadlessSurface::new();
        let mut renderer = Renderer::new(&Settings::default());
        let mut session = GameSession::new();

        let report = tick(&mut session, &TickInput::default());
        renderer.present(&mut surface, &report.intents).unwrap();
        let draws_after_first = surface.draws();

        let report = tick(&mut session, &TickInput::default());
        renderer.present(&mut surface, &report.intents).unwrap();

        assert_eq!(surface.cell(Position::new(16, 41)), None);
        assert_eq!(surface.cell(Position::new(17, 42)), Some("o"));
        // Only the ball moved: one clear, one draw
        assert_eq!(surface.clears(), 1);
        assert_eq!(surface.draws() - draws_after_first, 1);
        assert_eq!(surface.flushes(), 2);
    }

    #[test]
    fn test_wide_ball_glyph_keeps_right_wall() {
        let mut settings = Settings::default();
        settings.glyphs.ball = "()".to_string();
        let mut surface = HeadlessSurface::new();
        let mut renderer = Renderer::new(&settings);
        let mut session = GameSession::new();
        session.ball = Ball::new(Position::new(10, BOARD_WIDTH - 1), 1.0, 0.0);

        let wall = Position::new(10, BOARD_WIDTH + 1);
        for _ in 0..3 {
            let report = tick(&mut session, &TickInput::default());
            renderer.present(&mut surface, &report.intents).unwrap();
            assert_eq!(surface.cell(wall), Some("#"));
        }
        assert_eq!(surface.clears(), 2);
    }

    #[test]
    fn test_legend_hidden_when_disabled() {
        let settings = Settings {
            show_controls: false,
            ..Settings::default()
        };
        let mut surface = HeadlessSurface::new();
        let mut renderer = Renderer::new(&settings);
        let mut session = GameSession::new();

        let report = tick(&mut session, &TickInput::default());
        renderer.present(&mut surface, &report.intents).unwrap();
        assert_eq!(surface.row_text(LEGEND_ROW), "");
    }
}
