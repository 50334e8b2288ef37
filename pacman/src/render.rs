//! Rendering collaborators.
//!
//! A renderer only ever reads the game state. The HUD renderer here reports
//! score and lives through the log at a fixed interval instead of drawing.

use tracing::info;

use crate::score::format_score;
use crate::state::GameState;

pub trait Renderer {
    fn render(&mut self, state: &GameState);
}

/// Logs a status line every `interval` frames.
#[derive(Debug)]
pub struct HudRenderer {
    interval: u64,
    frame: u64,
}

impl HudRenderer {
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            frame: 0,
        }
    }
}

impl Default for HudRenderer {
    fn default() -> Self {
        // Once a second at 60 Hz
        Self::new(60)
    }
}

impl Renderer for HudRenderer {
    fn render(&mut self, state: &GameState) {
        self.frame += 1;
        if self.frame % self.interval != 0 {
            return;
        }

        let player = state.player.position();
        info!(
            score = %format_score(state.score.current_score()),
            high = %format_score(state.score.high_score()),
            lives = state.lives.remaining(),
            fruit_left = state.remaining_fruit(),
            x = player.x.round(),
            y = player.y.round(),
            super_mode = state.player.is_super(),
            "HUD"
        );
    }
}

/// Draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _state: &GameState) {}
}
