//! Pac-Man, the player-controlled agent.

use glam::Vec2;
use tracing::{debug, trace};

use crate::constants::player::{
    INVINCIBILITY_TIME, NORMAL_SPEED, PROBE_DISTANCE, RADIUS, SUPER_MODE_NOMINAL_DURATION, SUPER_MODE_TIME,
    SUPER_SPEED, SUPER_VISUAL_SCALE,
};
use crate::direction::{intent_vector, Direction};
use crate::maze::Maze;
use crate::timer::{Countdown, Stopwatch};

#[derive(Debug, Clone)]
pub struct Player {
    pos: Vec2,
    spawn: Vec2,
    direction: Option<Direction>,
    radius: f32,
    /// Drawn size; grows while super. Collision always uses `radius`.
    visual_radius: f32,
    normal_speed: f32,
    super_speed: f32,
    super_mode: Countdown,
    invincible: bool,
    invincible_for: Stopwatch,
}

impl Player {
    pub fn new(spawn: Vec2) -> Self {
        Self {
            pos: spawn,
            spawn,
            direction: None,
            radius: RADIUS,
            visual_radius: RADIUS,
            normal_speed: NORMAL_SPEED,
            super_speed: SUPER_SPEED,
            super_mode: Countdown::new(SUPER_MODE_NOMINAL_DURATION),
            invincible: false,
            invincible_for: Stopwatch::default(),
        }
    }

    /// Overrides the normal and super speeds, in pixels per second.
    pub fn with_speeds(mut self, normal: f32, super_speed: f32) -> Self {
        self.normal_speed = normal;
        self.super_speed = super_speed;
        self
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Teleports the player. Meant for level setup and tests.
    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub fn spawn(&self) -> Vec2 {
        self.spawn
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn visual_radius(&self) -> f32 {
        self.visual_radius
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Records the movement intent. No wall check happens here.
    pub fn set_direction(&mut self, intent: Option<Direction>) {
        self.direction = intent;
    }

    /// Current speed, which depends on super mode.
    pub fn speed(&self) -> f32 {
        if self.is_super() {
            self.super_speed
        } else {
            self.normal_speed
        }
    }

    /// Moves the player for one frame.
    ///
    /// The wall check probes a single pixel ahead in the intended direction,
    /// not the scaled destination; the full `direction * speed * dt` step is
    /// only applied if that probe is clear. Returns whether the player moved.
    pub fn advance(&mut self, maze: &Maze, dt: f32, intent: Option<Direction>) -> bool {
        self.set_direction(intent);

        let unit = intent_vector(intent);
        let probe = self.pos + unit * PROBE_DISTANCE;
        if maze.circle_intersects_walls(probe, self.radius) {
            trace!(direction = ?intent, x = self.pos.x, y = self.pos.y, "Player blocked by wall");
            return false;
        }

        self.pos += unit * self.speed() * dt;
        true
    }

    pub fn is_super(&self) -> bool {
        self.super_mode.is_running()
    }

    /// Seconds of super mode left; zero when not super.
    pub fn super_time_left(&self) -> f32 {
        self.super_mode.remaining()
    }

    /// Enters (or extends) super mode for a fixed four seconds.
    pub fn activate_super_mode(&mut self) {
        self.super_mode.start_with(SUPER_MODE_TIME);
        self.visual_radius = self.radius * SUPER_VISUAL_SCALE;
        debug!(seconds = SUPER_MODE_TIME, "Super mode activated");
    }

    pub fn deactivate_super_mode(&mut self) {
        self.super_mode.reset();
        self.visual_radius = self.radius;
        debug!("Super mode ended");
    }

    /// Counts super mode down. Returns `true` on the frame it runs out.
    pub fn update_super_mode(&mut self, dt: f32) -> bool {
        if self.super_mode.tick(dt) {
            self.deactivate_super_mode();
            return true;
        }
        false
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible
    }

    /// Turning invincibility on sends the player back to spawn and restarts the timer.
    pub fn set_invincible(&mut self, invincible: bool) {
        self.invincible = invincible;
        if invincible {
            self.pos = self.spawn;
            self.invincible_for.reset();
            debug!(x = self.spawn.x, y = self.spawn.y, "Player respawned invincible");
        }
    }

    /// Accumulates invincible time and clears invincibility after the fixed duration.
    pub fn update_invincibility(&mut self, dt: f32) {
        if !self.invincible {
            return;
        }

        self.invincible_for.tick(dt);
        if self.invincible_for.elapsed() >= INVINCIBILITY_TIME {
            self.invincible = false;
            self.invincible_for.reset();
            debug!("Invincibility expired");
        }
    }
}
