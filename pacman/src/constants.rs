//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::Vec2;

/// The target duration of a single frame (60 Hz).
pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of the playfield, in pixels.
pub const BOARD_SIZE: Vec2 = Vec2::new(1530.0, 890.0);

/// Number of lives a session starts with unless configured otherwise.
pub const DEFAULT_LIVES: u8 = 3;

/// Seconds the start screen ("READY!") stays up before play begins.
pub const START_DELAY: f32 = 2.0;

pub mod player {
    use glam::Vec2;

    /// Where Pac-Man starts, and where he is put back after losing a life.
    pub const SPAWN: Vec2 = Vec2::new(765.0, 525.0);
    pub const RADIUS: f32 = 34.0;
    /// Pixels per second in normal mode.
    pub const NORMAL_SPEED: f32 = 250.0;
    /// Pixels per second while super mode is active.
    pub const SUPER_SPEED: f32 = 400.0;
    /// Seconds of super mode granted by a super pellet.
    pub const SUPER_MODE_TIME: f32 = 4.0;
    /// Nominal super mode duration. Carried for parity, never read by the timer.
    pub const SUPER_MODE_NOMINAL_DURATION: f32 = 5.0;
    /// Visual radius multiplier while super.
    pub const SUPER_VISUAL_SCALE: f32 = 1.5;
    /// Seconds of invincibility after losing a life.
    pub const INVINCIBILITY_TIME: f32 = 2.0;
    /// Distance of the wall probe ahead of the player, in pixels.
    pub const PROBE_DISTANCE: f32 = 1.0;
    /// Radius multiplier used when tunnelling through key walls in super mode.
    pub const TUNNEL_REACH: f32 = 1.1;
}

pub mod ghost {
    use glam::Vec2;

    pub const RADIUS: f32 = 35.0;
    /// Pixels per second.
    pub const SPEED: f32 = 150.0;
    /// Side length of the square footprint used for ghost-vs-wall probes.
    pub const FOOTPRINT: f32 = 70.0;
    /// Chance per chase step that the pursuit decision is replaced by a random turn.
    pub const RANDOM_TURN_CHANCE: f64 = 0.25;
    /// Seconds ghosts stay frightened after a power pellet.
    pub const FRIGHTENED_TIME: f32 = 5.0;

    /// The ghost house: a ghost inside this (open) box runs its escape routine.
    pub const HOME_MIN: Vec2 = Vec2::new(650.0, 366.0);
    pub const HOME_MAX: Vec2 = Vec2::new(870.0, 446.0);
    /// Horizontal center of the ghost house.
    pub const HOME_CENTER_X: f32 = 765.0;
    /// How close to the center counts as "centered" during the escape routine.
    pub const HOME_CENTER_TOLERANCE: f32 = 2.0;
    pub const HOME_CENTER: Vec2 = Vec2::new(HOME_CENTER_X, 406.0);
    /// The whole house, walls and doorway included. Chasing ghosts never step deeper into it.
    pub const HOUSE_ORIGIN: Vec2 = Vec2::new(630.0, 346.0);
    pub const HOUSE_SIZE: Vec2 = Vec2::new(260.0, 120.0);

    /// Spawn slots inside the ghost house, one per ghost.
    pub const SPAWNS: [Vec2; 4] = [
        Vec2::new(700.0, 406.0),
        Vec2::new(745.0, 406.0),
        Vec2::new(785.0, 406.0),
        Vec2::new(830.0, 406.0),
    ];
}

pub mod collectable {
    pub const FRUIT_RADIUS: f32 = 50.0;
    pub const POWER_PELLET_RADIUS: f32 = 10.0;
    pub const SUPER_PELLET_RADIUS: f32 = 15.0;
    pub const KEY_RADIUS: f32 = 20.0;
    pub const STAR_RADIUS: f32 = 20.0;
}

pub mod star {
    /// Seconds before the star appears.
    pub const REVEAL_DELAY: f32 = 30.0;
    /// Seconds between symbol re-rolls.
    pub const SYMBOL_CYCLE: f32 = 2.0;
    /// Number of distinct symbols.
    pub const SYMBOL_COUNT: u8 = 4;
}

pub mod score {
    pub const FRUIT: u32 = 10;
    pub const POWER_PELLET: u32 = 100;
    pub const SUPER_PELLET: u32 = 500;
    pub const KEY: u32 = 50;
    pub const GHOST: u32 = 200;

    pub const STAR_JACKPOT: u32 = 5000;
    pub const STAR_PAIR: u32 = 2000;
    pub const STAR_CONSOLATION: u32 = 500;
}
