//! Ghost agents and their movement.
//!
//! Ghosts have no pathfinding. Inside the ghost house they walk to the middle
//! and straight up, ignoring walls. Outside it they keep going in their current
//! direction, re-choosing when the footprint probe hits a wall, and then lean
//! toward Pac-Man along whichever axis is further off and not blocked. One
//! chase step in four throws that decision away for a random turn.
//!
//! Once out, the house is one-way: a chasing ghost never steps back toward its
//! middle while overlapping it.

use glam::Vec2;
use rand::seq::IndexedRandom;
use rand::Rng;
use smallvec::SmallVec;
use strum_macros::{AsRefStr, IntoStaticStr};
use tracing::{debug, trace};

use crate::constants::ghost::{
    FOOTPRINT, HOME_CENTER, HOME_CENTER_TOLERANCE, HOME_CENTER_X, HOME_MAX, HOME_MIN, HOUSE_ORIGIN, HOUSE_SIZE,
    RADIUS, RANDOM_TURN_CHANCE, SPEED,
};
use crate::direction::Direction;
use crate::maze::{Maze, Rect};
use crate::player::Player;

/// The four classic ghost types. Only identity and looks differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum GhostKind {
    Blinky,
    Pinky,
    Inky,
    Clyde,
}

impl GhostKind {
    pub const ALL: [GhostKind; 4] = [GhostKind::Blinky, GhostKind::Pinky, GhostKind::Inky, GhostKind::Clyde];
}

/// The observable state of a ghost, derived from its flags and position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum GhostState {
    /// Still inside the ghost house, walking out.
    BoxEscape,
    Chasing,
    Frightened,
    /// Inert until respawned.
    Eaten,
}

/// How random turns pick their direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnPolicy {
    /// Only directions whose probe is clear.
    #[default]
    LegalOnly,
    /// Any of the four directions, even into a wall. The wall is only noticed
    /// (and the direction re-chosen) on the next step.
    Legacy,
}

/// True if a point lies strictly inside the ghost house.
pub fn in_home_box(pos: Vec2) -> bool {
    pos.x > HOME_MIN.x && pos.x < HOME_MAX.x && pos.y > HOME_MIN.y && pos.y < HOME_MAX.y
}

const HOUSE: Rect = Rect {
    pos: HOUSE_ORIGIN,
    size: HOUSE_SIZE,
};

/// True if a step from `from` to `to` overlaps the house and gets closer to its middle.
pub fn enters_house(from: Vec2, to: Vec2) -> bool {
    Rect::centered(to, Vec2::splat(FOOTPRINT)).intersects_rect(&HOUSE)
        && to.distance_squared(HOME_CENTER) < from.distance_squared(HOME_CENTER)
}

#[derive(Debug, Clone)]
pub struct Ghost {
    kind: GhostKind,
    pos: Vec2,
    spawn: Vec2,
    direction: Direction,
    radius: f32,
    speed: f32,
    frightened: bool,
    eaten: bool,
    turn_policy: TurnPolicy,
}

impl Ghost {
    pub fn new(kind: GhostKind, spawn: Vec2) -> Self {
        Self {
            kind,
            pos: spawn,
            spawn,
            direction: Direction::Up,
            radius: RADIUS,
            speed: SPEED,
            frightened: false,
            eaten: false,
            turn_policy: TurnPolicy::default(),
        }
    }

    pub fn with_turn_policy(mut self, policy: TurnPolicy) -> Self {
        self.turn_policy = policy;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn kind(&self) -> GhostKind {
        self.kind
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Teleports the ghost. Meant for level setup and tests.
    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub fn spawn(&self) -> Vec2 {
        self.spawn
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_frightened(&self) -> bool {
        self.frightened
    }

    pub fn set_frightened(&mut self, frightened: bool) {
        self.frightened = frightened;
    }

    pub fn is_eaten(&self) -> bool {
        self.eaten
    }

    pub fn set_eaten(&mut self, eaten: bool) {
        self.eaten = eaten;
    }

    pub fn state(&self) -> GhostState {
        if self.eaten {
            GhostState::Eaten
        } else if self.frightened {
            GhostState::Frightened
        } else if in_home_box(self.pos) {
            GhostState::BoxEscape
        } else {
            GhostState::Chasing
        }
    }

    /// Puts the ghost back on its spawn slot with both flags cleared.
    pub fn respawn(&mut self) {
        self.pos = self.spawn;
        self.frightened = false;
        self.eaten = false;
        trace!(ghost = self.kind.as_ref(), "Ghost respawned");
    }

    /// Circle-circle overlap with Pac-Man. Eaten ghosts never collide.
    pub fn collides_with_player(&self, player: &Player) -> bool {
        !self.eaten && self.pos.distance(player.position()) < self.radius + player.radius()
    }

    /// Moves the ghost for one frame and returns its direction afterwards.
    ///
    /// Eaten ghosts do not move at all.
    pub fn advance(&mut self, maze: &Maze, player: &Player, dt: f32, rng: &mut impl Rng) -> Direction {
        if self.eaten {
            return self.direction;
        }

        if in_home_box(self.pos) {
            self.escape_home(dt);
        } else {
            self.chase(maze, player, dt, rng);
        }

        self.direction
    }

    /// Walks toward the house's horizontal center, then straight up. Walls are ignored.
    fn escape_home(&mut self, dt: f32) {
        let step = self.speed * dt;
        let offset = HOME_CENTER_X - self.pos.x;

        if offset.abs() > HOME_CENTER_TOLERANCE {
            self.direction = if offset > 0.0 { Direction::Right } else { Direction::Left };
            self.pos.x += offset.signum() * step.min(offset.abs());
        } else {
            self.pos.x = HOME_CENTER_X;
            self.direction = Direction::Up;
            self.pos += Direction::Up.as_vec2() * step;
        }
    }

    fn chase(&mut self, maze: &Maze, player: &Player, dt: f32, rng: &mut impl Rng) {
        let step = self.speed * dt;

        let next = self.pos + self.direction.as_vec2() * step;
        if self.blocked(maze, next) {
            let previous = self.direction;
            self.direction = self.choose_new_direction(maze, step, rng);
            trace!(ghost = self.kind.as_ref(), from = previous.as_ref(), to = self.direction.as_ref(), "Ghost blocked, turning");
        } else {
            self.pos = next;
        }

        if rng.random_bool(RANDOM_TURN_CHANCE) {
            self.direction = self.choose_random_direction(maze, step, rng);
        } else if let Some(direction) = self.pursuit_direction(maze, player, step) {
            self.direction = direction;
        }
    }

    /// The direction that closes the larger of the two axis gaps to Pac-Man,
    /// or the other axis if that one is blocked. Frightened ghosts flee instead.
    pub fn pursuit_direction(&self, maze: &Maze, player: &Player, step: f32) -> Option<Direction> {
        let mut delta = player.position() - self.pos;
        if self.frightened {
            delta = -delta;
        }

        let horizontal = axis_direction(delta.x, Direction::Right, Direction::Left);
        let vertical = axis_direction(delta.y, Direction::Down, Direction::Up);

        let preferred = if delta.x.abs() > delta.y.abs() {
            [horizontal, vertical]
        } else {
            [vertical, horizontal]
        };

        preferred
            .into_iter()
            .flatten()
            .find(|&direction| self.probe_clear(maze, direction, step))
    }

    /// Directions whose one-step footprint probe neither hits a wall nor heads into the house.
    pub fn valid_directions(&self, maze: &Maze, step: f32) -> SmallVec<[Direction; 4]> {
        Direction::DIRECTIONS
            .into_iter()
            .filter(|&direction| self.probe_clear(maze, direction, step))
            .collect()
    }

    /// A uniformly random clear direction. Keeps the current one if boxed in.
    pub fn choose_new_direction(&self, maze: &Maze, step: f32, rng: &mut impl Rng) -> Direction {
        let valid = self.valid_directions(maze, step);
        valid.choose(rng).copied().unwrap_or(self.direction)
    }

    /// A uniformly random direction under the ghost's [`TurnPolicy`].
    ///
    /// With [`TurnPolicy::LegalOnly`] this only falls back to the full set when
    /// nothing is clear.
    pub fn choose_random_direction(&self, maze: &Maze, step: f32, rng: &mut impl Rng) -> Direction {
        let valid = self.valid_directions(maze, step);
        let choice = match self.turn_policy {
            TurnPolicy::LegalOnly if !valid.is_empty() => valid.choose(rng).copied(),
            _ => Direction::DIRECTIONS.choose(rng).copied(),
        };
        choice.unwrap_or(self.direction)
    }

    fn blocked(&self, maze: &Maze, to: Vec2) -> bool {
        maze.footprint_intersects_walls(to) || enters_house(self.pos, to)
    }

    fn probe_clear(&self, maze: &Maze, direction: Direction, step: f32) -> bool {
        !self.blocked(maze, self.pos + direction.as_vec2() * step)
    }
}

/// The direction along one axis that reduces `delta`, if there is any gap at all.
fn axis_direction(delta: f32, positive: Direction, negative: Direction) -> Option<Direction> {
    if delta > 0.0 {
        Some(positive)
    } else if delta < 0.0 {
        Some(negative)
    } else {
        None
    }
}

/// Sets every ghost's frightened flag. Eaten ghosts are left alone.
pub fn set_all_frightened(ghosts: &mut [Ghost], frightened: bool) -> usize {
    let mut changed = 0;
    for ghost in ghosts.iter_mut().filter(|ghost| !ghost.is_eaten()) {
        if ghost.is_frightened() != frightened {
            changed += 1;
        }
        ghost.set_frightened(frightened);
    }
    debug!(frightened, changed, "Ghost frightened state updated");
    changed
}

/// Respawns every ghost.
pub fn respawn_all(ghosts: &mut [Ghost]) {
    for ghost in ghosts.iter_mut() {
        ghost.respawn();
    }
}
