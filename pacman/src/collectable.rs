//! Pickups: fruit, power pellets, super pellets, keys and the star.
//!
//! All variants share position, radius and an active flag; the per-variant
//! payload lives in [`CollectableKind`]. Collection is one-way: once a
//! collectable goes inactive it never comes back within a session.

use glam::Vec2;
use smallvec::SmallVec;
use strum_macros::IntoStaticStr;
use tracing::trace;

use crate::constants::collectable::{FRUIT_RADIUS, KEY_RADIUS, POWER_PELLET_RADIUS, STAR_RADIUS, SUPER_PELLET_RADIUS};
use crate::constants::score;
use crate::maze::Maze;

/// What a collectable is, and any data only that variant carries.
#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum CollectableKind {
    Fruit,
    PowerPellet,
    SuperPellet,
    /// Opens the listed maze walls when collected.
    Key { unlocks: SmallVec<[usize; 4]> },
    /// Scored by the star minigame rather than a fixed value.
    Star,
}

impl CollectableKind {
    /// The fixed score for collecting this kind. The star's score depends on the minigame.
    pub fn score_value(&self) -> Option<u32> {
        match self {
            CollectableKind::Fruit => Some(score::FRUIT),
            CollectableKind::PowerPellet => Some(score::POWER_PELLET),
            CollectableKind::SuperPellet => Some(score::SUPER_PELLET),
            CollectableKind::Key { .. } => Some(score::KEY),
            CollectableKind::Star => None,
        }
    }

    /// The fixed pickup radius of this kind.
    pub fn radius(&self) -> f32 {
        match self {
            CollectableKind::Fruit => FRUIT_RADIUS,
            CollectableKind::PowerPellet => POWER_PELLET_RADIUS,
            CollectableKind::SuperPellet => SUPER_PELLET_RADIUS,
            CollectableKind::Key { .. } => KEY_RADIUS,
            CollectableKind::Star => STAR_RADIUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Collectable {
    pos: Vec2,
    radius: f32,
    active: bool,
    /// Set once collected, so a hidden star can be told apart from a taken one.
    collected: bool,
    kind: CollectableKind,
}

impl Collectable {
    fn new(pos: Vec2, kind: CollectableKind) -> Self {
        Self {
            pos,
            radius: kind.radius(),
            active: true,
            collected: false,
            kind,
        }
    }

    pub fn fruit(pos: Vec2) -> Self {
        Self::new(pos, CollectableKind::Fruit)
    }

    pub fn power_pellet(pos: Vec2) -> Self {
        Self::new(pos, CollectableKind::PowerPellet)
    }

    pub fn super_pellet(pos: Vec2) -> Self {
        Self::new(pos, CollectableKind::SuperPellet)
    }

    pub fn key(pos: Vec2, unlocks: impl IntoIterator<Item = usize>) -> Self {
        Self::new(
            pos,
            CollectableKind::Key {
                unlocks: unlocks.into_iter().collect(),
            },
        )
    }

    /// The star starts hidden; see [`Collectable::show`].
    pub fn star(pos: Vec2) -> Self {
        Self {
            active: false,
            ..Self::new(pos, CollectableKind::Star)
        }
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn kind(&self) -> &CollectableKind {
        &self.kind
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Walls opened by this collectable. Empty for everything but keys.
    pub fn unlocks(&self) -> &[usize] {
        match &self.kind {
            CollectableKind::Key { unlocks } => unlocks,
            _ => &[],
        }
    }

    /// Circle-circle overlap with the given circle. Always false once inactive.
    ///
    /// Never mutates; the caller decides whether to [`collect`](Self::collect).
    pub fn check_collision(&self, pos: Vec2, radius: f32) -> bool {
        self.active && self.pos.distance(pos) < self.radius + radius
    }

    /// Marks the collectable as taken. Idempotent.
    pub fn collect(&mut self) {
        if self.active {
            trace!(kind = <&str>::from(&self.kind), x = self.pos.x, y = self.pos.y, "Collected");
        }
        self.active = false;
        self.collected = true;
    }

    /// Collects the collectable if it overlaps the given circle. Returns whether it was collected.
    pub fn collect_if_touching(&mut self, pos: Vec2, radius: f32) -> bool {
        if self.check_collision(pos, radius) {
            self.collect();
            true
        } else {
            false
        }
    }

    /// Collects a key and opens its walls, returning the walls that were actually opened.
    ///
    /// Does nothing for other kinds.
    pub fn collect_key(&mut self, maze: &mut Maze) -> SmallVec<[usize; 4]> {
        if !self.active {
            return SmallVec::new();
        }
        let CollectableKind::Key { unlocks } = &self.kind else {
            return SmallVec::new();
        };

        let opened = unlocks.iter().copied().filter(|&wall| maze.unlock(wall)).collect();
        self.collect();
        opened
    }

    /// Makes a hidden collectable visible. Only ever succeeds for a star that
    /// has not been collected yet; returns whether anything changed.
    pub fn show(&mut self) -> bool {
        if self.kind != CollectableKind::Star || self.active || self.collected {
            return false;
        }
        self.active = true;
        true
    }

    pub fn was_collected(&self) -> bool {
        self.collected
    }
}

/// Number of collectables in a slice that are still active.
pub fn remaining(collectables: &[Collectable]) -> usize {
    collectables.iter().filter(|c| c.is_active()).count()
}
