//! The session loop: ready screen, play, and the end of the game.

use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace, warn};

use crate::audio::AudioSink;
use crate::config::Config;
use crate::constants::{LOOP_TIME, START_DELAY};
use crate::events::GameEvent;
use crate::formatter;
use crate::input::InputSource;
use crate::render::Renderer;
use crate::score::HighScoreStore;
use crate::state::GameState;
use crate::timer::Countdown;
use crate::update::update_frame;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stage {
    /// The start screen, counting down to play.
    Ready { remaining: Countdown },
    Playing,
    Won,
    Lost,
}

impl Stage {
    pub fn is_over(&self) -> bool {
        matches!(self, Stage::Won | Stage::Lost)
    }
}

/// Drives one game from the start screen to a win or loss.
///
/// Each frame asks the input source for an intent, advances the game state,
/// plays the cues for whatever happened and hands the state to the renderer.
pub struct Session<A, R, I> {
    state: GameState,
    config: Config,
    audio: A,
    renderer: R,
    input: I,
    stage: Stage,
    rng: SmallRng,
    frames: u64,
    store: HighScoreStore,
    starting_high: u32,
}

impl<A, R, I> Session<A, R, I>
where
    A: AudioSink,
    R: Renderer,
    I: InputSource,
{
    pub fn new(state: GameState, config: Config, audio: A, renderer: R, input: I) -> Self {
        let stage = if config.skip_start {
            Stage::Playing
        } else {
            Stage::Ready {
                remaining: Countdown::started(START_DELAY),
            }
        };
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::seed_from_u64(rand::rng().random()),
        };
        let store = HighScoreStore::new(config.high_score_path.clone());
        let starting_high = state.score.high_score();

        Self {
            state,
            config,
            audio,
            renderer,
            input,
            stage,
            rng,
            frames: 0,
            store,
            starting_high,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Frames stepped so far, including the start screen.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs a single frame of `dt` seconds and returns what happened during it.
    pub fn step(&mut self, dt: f32) -> Vec<GameEvent> {
        if self.stage.is_over() {
            return Vec::new();
        }

        formatter::increment_frame();
        self.frames += 1;

        let events = match self.stage {
            Stage::Ready { mut remaining } => {
                self.stage = if remaining.tick(dt) {
                    info!("Ready screen over, starting play");
                    Stage::Playing
                } else {
                    Stage::Ready { remaining }
                };
                Vec::new()
            }
            Stage::Playing => {
                let intent = self.input.next_intent(&self.state);
                let events = update_frame(&mut self.state, dt, intent, &mut self.rng);
                self.dispatch(&events);

                if !self.state.is_game_running() {
                    self.stage = if self.state.is_game_won() { Stage::Won } else { Stage::Lost };
                }
                events
            }
            Stage::Won | Stage::Lost => Vec::new(),
        };

        self.renderer.render(&self.state);
        events
    }

    fn dispatch(&mut self, events: &[GameEvent]) {
        for event in events {
            trace!(?event, "Game event");
            if let Some(sound) = event.sound() {
                self.audio.play(sound);
            }
        }
    }

    /// Steps frames at `LOOP_TIME` until the game ends or the frame limit is hit,
    /// then stores the high score if it was beaten. Returns the final stage.
    pub fn run(&mut self) -> Stage {
        info!(
            loop_time = ?LOOP_TIME,
            realtime = self.config.realtime,
            max_frames = ?self.config.max_frames,
            "Session started"
        );

        let fixed_dt = LOOP_TIME.as_secs_f32();
        let mut last_tick = Instant::now();

        while !self.stage.is_over() {
            if self.config.max_frames.is_some_and(|max| self.frames >= max) {
                info!(frames = self.frames, "Frame limit reached");
                break;
            }

            let start = Instant::now();
            let dt = if self.config.realtime {
                start.duration_since(last_tick).as_secs_f32()
            } else {
                fixed_dt
            };
            last_tick = start;

            self.step(dt);

            if self.config.realtime {
                let spent = start.elapsed();
                if spent < LOOP_TIME {
                    spin_sleep::sleep(LOOP_TIME - spent);
                } else {
                    warn!(behind = ?(spent - LOOP_TIME), "Frame took longer than the loop time");
                }
            }
        }

        self.save_high_score();
        info!(
            stage = ?self.stage,
            frames = self.frames,
            score = self.state.score.current_score(),
            "Session ended"
        );
        self.stage
    }

    /// Writes the high score out when this session raised it. Failures are logged, not returned.
    pub fn save_high_score(&self) {
        let high = self.state.score.high_score();
        if high <= self.starting_high {
            debug!(high, "High score unchanged");
            return;
        }

        match self.store.save(high) {
            Ok(()) => info!(high, path = %self.store.path().display(), "New high score saved"),
            Err(error) => warn!(%error, "Could not save high score"),
        }
    }
}
