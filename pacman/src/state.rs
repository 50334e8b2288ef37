use rand::Rng;
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::collectable::{self, Collectable};
use crate::constants::DEFAULT_LIVES;
use crate::ghost::{Ghost, GhostKind, TurnPolicy};
use crate::maze::layout::Level;
use crate::maze::Maze;
use crate::player::Player;
use crate::score::ScoreBoard;
use crate::star::StarGame;
use crate::timer::Stopwatch;

/// Remaining player lives. Never goes below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lives(u8);

impl Lives {
    pub fn new(lives: u8) -> Self {
        Self(lives)
    }

    /// Takes a life away, returning how many are left. A no-op at zero.
    pub fn lose(&mut self) -> u8 {
        self.0 = self.0.saturating_sub(1);
        self.0
    }

    pub fn remaining(&self) -> u8 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Lives {
    fn default() -> Self {
        Self(DEFAULT_LIVES)
    }
}

/// The `GameState` struct holds all the essential data for a session.
///
/// Score, lives, the win/running flags and every entity live here. Only the
/// update functions in [`crate::update`] mutate it during play; renderers get
/// a shared reference.
#[derive(Debug, Clone)]
pub struct GameState {
    pub score: ScoreBoard,
    pub lives: Lives,
    pub maze: Maze,
    pub player: Player,
    pub ghosts: SmallVec<[Ghost; 4]>,
    pub fruits: Vec<Collectable>,
    pub power_pellets: Vec<Collectable>,
    pub super_pellets: Vec<Collectable>,
    pub keys: Vec<Collectable>,
    pub star: StarGame,
    /// Session time at which the current frightened window started.
    pub frightened_since: Option<f32>,
    /// Seconds of play so far.
    pub clock: Stopwatch,
    won: bool,
    running: bool,
}

impl GameState {
    /// Creates a new `GameState` by placing every entity of the level.
    pub fn new(level: Level, lives: u8, high_score: u32, turn_policy: TurnPolicy, rng: &mut impl Rng) -> Self {
        let Level {
            maze,
            player_spawn,
            ghost_spawns,
            fruits,
            power_pellets,
            super_pellets,
            keys,
            star,
        } = level;

        let ghosts = GhostKind::ALL
            .iter()
            .zip(ghost_spawns)
            .map(|(kind, spawn)| Ghost::new(*kind, spawn).with_turn_policy(turn_policy))
            .collect();

        let state = Self {
            score: ScoreBoard::new(high_score),
            lives: Lives::new(lives),
            maze,
            player: Player::new(player_spawn),
            ghosts,
            fruits: fruits.into_iter().map(Collectable::fruit).collect(),
            power_pellets: power_pellets.into_iter().map(Collectable::power_pellet).collect(),
            super_pellets: super_pellets.into_iter().map(Collectable::super_pellet).collect(),
            keys: keys.into_iter().map(|key| Collectable::key(key.pos, key.unlocks)).collect(),
            star: StarGame::new(star, rng),
            frightened_since: None,
            clock: Stopwatch::default(),
            won: false,
            running: true,
        };

        debug!(
            walls = state.maze.len(),
            fruits = state.fruits.len(),
            ghosts = state.ghosts.len(),
            lives,
            "Game state created"
        );
        state
    }

    /// A fresh session on the built-in level.
    pub fn classic(rng: &mut impl Rng) -> Self {
        Self::new(Level::classic(), DEFAULT_LIVES, 0, TurnPolicy::default(), rng)
    }

    pub fn is_game_won(&self) -> bool {
        self.won
    }

    pub fn is_game_running(&self) -> bool {
        self.running
    }

    /// Stops the session, recording whether it was won.
    pub fn finish(&mut self, won: bool) {
        if !self.running {
            return;
        }
        self.running = false;
        self.won = won;
        info!(
            won,
            score = self.score.current_score(),
            seconds = self.clock.elapsed(),
            "Session finished"
        );
    }

    pub fn remaining_fruit(&self) -> usize {
        collectable::remaining(&self.fruits)
    }

    /// The fruit at `index`, if there is one.
    pub fn fruit(&self, index: usize) -> Option<&Collectable> {
        self.fruits.get(index)
    }
}
