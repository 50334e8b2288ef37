//! Sources of player intent.
//!
//! The session asks an [`InputSource`] for a direction once per frame. The
//! headless binary uses the [`Autopilot`]; tests feed a [`ScriptedInput`].

use std::collections::VecDeque;

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use smallvec::SmallVec;
use tracing::trace;

use crate::constants::player::PROBE_DISTANCE;
use crate::direction::Direction;
use crate::state::GameState;

pub trait InputSource {
    /// The movement intent for the coming frame. `None` stands still.
    fn next_intent(&mut self, state: &GameState) -> Option<Direction>;
}

/// Replays a fixed list of intents, then stands still.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    intents: VecDeque<Option<Direction>>,
}

impl ScriptedInput {
    pub fn new(intents: impl IntoIterator<Item = Option<Direction>>) -> Self {
        Self {
            intents: intents.into_iter().collect(),
        }
    }

    /// Holds one direction for `frames` frames.
    pub fn hold(direction: Direction, frames: usize) -> Self {
        Self::new(std::iter::repeat_n(Some(direction), frames))
    }

    pub fn remaining(&self) -> usize {
        self.intents.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_intent(&mut self, _state: &GameState) -> Option<Direction> {
        self.intents.pop_front().flatten()
    }
}

/// Frames without progress before the autopilot gives up on its target for a while.
const STUCK_FRAMES: u32 = 12;
/// Frames spent wandering once stuck.
const WANDER_FRAMES: u32 = 40;

/// Steers Pac-Man toward the nearest remaining fruit, wandering off at random
/// whenever a wall keeps it from making progress.
#[derive(Debug)]
pub struct Autopilot {
    rng: SmallRng,
    last_pos: Option<Vec2>,
    stuck_for: u32,
    wander: Option<(Direction, u32)>,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            last_pos: None,
            stuck_for: 0,
            wander: None,
        }
    }

    fn clear_directions(state: &GameState) -> SmallVec<[Direction; 4]> {
        let pos = state.player.position();
        let radius = state.player.radius();
        Direction::DIRECTIONS
            .into_iter()
            .filter(|direction| {
                !state
                    .maze
                    .circle_intersects_walls(pos + direction.as_vec2() * PROBE_DISTANCE, radius)
            })
            .collect()
    }

    fn target(state: &GameState) -> Option<Vec2> {
        let pos = state.player.position();
        state
            .fruits
            .iter()
            .filter(|fruit| fruit.is_active())
            .map(|fruit| fruit.position())
            .min_by(|a, b| a.distance_squared(pos).total_cmp(&b.distance_squared(pos)))
    }
}

impl InputSource for Autopilot {
    fn next_intent(&mut self, state: &GameState) -> Option<Direction> {
        let pos = state.player.position();
        if self.last_pos.is_some_and(|last| last.distance_squared(pos) < 0.01) {
            self.stuck_for += 1;
        } else {
            self.stuck_for = 0;
        }
        self.last_pos = Some(pos);

        let clear = Self::clear_directions(state);

        if let Some((direction, frames)) = self.wander {
            if frames > 0 && clear.contains(&direction) {
                self.wander = Some((direction, frames - 1));
                return Some(direction);
            }
            self.wander = None;
        }

        if self.stuck_for >= STUCK_FRAMES {
            self.stuck_for = 0;
            if let Some(&direction) = clear.choose(&mut self.rng) {
                trace!(direction = direction.as_ref(), "Autopilot stuck, wandering");
                self.wander = Some((direction, WANDER_FRAMES));
                return Some(direction);
            }
        }

        let delta = Self::target(state)? - pos;
        let horizontal = if delta.x >= 0.0 { Direction::Right } else { Direction::Left };
        let vertical = if delta.y >= 0.0 { Direction::Down } else { Direction::Up };
        let preferred = if delta.x.abs() > delta.y.abs() {
            [horizontal, vertical]
        } else {
            [vertical, horizontal]
        };

        preferred
            .into_iter()
            .find(|direction| clear.contains(direction))
            .or_else(|| clear.first().copied())
    }
}
