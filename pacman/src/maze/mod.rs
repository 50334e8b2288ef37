//! Maze collision geometry.
//!
//! The maze is a flat list of axis-aligned walls. Walls never move; the only
//! mutation after construction is unlocking (a wall turning inactive), done by
//! key pickups and super-mode tunnelling.

pub mod layout;
pub mod parser;

use glam::Vec2;
use strum_macros::{AsRefStr, EnumString};
use tracing::{debug, trace};

use crate::constants::ghost::FOOTPRINT;

/// An axis-aligned rectangle, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// A rectangle of the given size centered on `center`.
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    pub fn min(&self) -> Vec2 {
        self.pos
    }

    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// True if a circle overlaps this rectangle.
    ///
    /// Uses the closest point on the rectangle to the circle's center; touching
    /// edges do not count.
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        let closest = center.clamp(self.min(), self.max());
        center.distance_squared(closest) < radius * radius
    }

    /// True if two rectangles overlap with non-zero area.
    pub fn intersects_rect(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }
}

/// The display colour of a wall. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WallTag {
    #[default]
    Blue,
    Red,
    Green,
    Yellow,
    Pink,
    Cyan,
    Orange,
    White,
    #[strum(serialize = "gray", serialize = "grey")]
    Gray,
}

impl WallTag {
    /// Parses a colour token, falling back to the default colour for unknown names.
    pub fn from_token(token: &str) -> Self {
        token.parse().unwrap_or_default()
    }
}

/// A single wall of the maze.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    pub rect: Rect,
    pub tag: WallTag,
    active: bool,
}

impl Wall {
    pub fn new(rect: Rect, tag: WallTag) -> Self {
        Self { rect, tag, active: true }
    }

    /// Inactive walls are passable and never take part in collision tests.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// The collision geometry of a level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Maze {
    walls: Vec<Wall>,
}

impl Maze {
    /// Builds a maze from parsed `(rect, tag)` pairs. Every wall starts active.
    pub fn new(walls: impl IntoIterator<Item = (Rect, WallTag)>) -> Self {
        let walls: Vec<Wall> = walls.into_iter().map(|(rect, tag)| Wall::new(rect, tag)).collect();
        debug!(walls = walls.len(), "Maze built");
        Self { walls }
    }

    /// A maze with no walls at all. A valid, playable (if boring) maze.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn wall(&self, index: usize) -> Option<&Wall> {
        self.walls.get(index)
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Circle test against every active wall.
    ///
    /// This is the probe Pac-Man moves with.
    pub fn circle_intersects_walls(&self, center: Vec2, radius: f32) -> bool {
        self.active_walls().any(|wall| wall.rect.intersects_circle(center, radius))
    }

    /// Fixed-size box test against every active wall.
    ///
    /// This is the coarser probe ghosts move with: a constant `FOOTPRINT`-sided
    /// square centered on `center`, whatever the ghost's actual radius.
    pub fn footprint_intersects_walls(&self, center: Vec2) -> bool {
        let footprint = Rect::centered(center, Vec2::splat(FOOTPRINT));
        self.active_walls().any(|wall| wall.rect.intersects_rect(&footprint))
    }

    /// Circle test against a single wall. Inactive and unknown walls never intersect.
    pub fn circle_intersects_wall(&self, index: usize, center: Vec2, radius: f32) -> bool {
        self.walls
            .get(index)
            .is_some_and(|wall| wall.active && wall.rect.intersects_circle(center, radius))
    }

    /// Makes a wall passable. Returns `false` if the index is unknown or the wall was already open.
    pub fn unlock(&mut self, index: usize) -> bool {
        match self.walls.get_mut(index) {
            Some(wall) if wall.active => {
                wall.active = false;
                trace!(wall = index, "Wall unlocked");
                true
            }
            _ => false,
        }
    }

    fn active_walls(&self) -> impl Iterator<Item = &Wall> {
        self.walls.iter().filter(|wall| wall.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_circle_edge_is_not_overlap() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!rect.intersects_circle(Vec2::new(15.0, 5.0), 5.0));
        assert!(rect.intersects_circle(Vec2::new(14.9, 5.0), 5.0));
    }

    #[test]
    fn test_rect_centered() {
        let rect = Rect::centered(Vec2::new(50.0, 50.0), Vec2::splat(70.0));
        assert_eq!(rect.min(), Vec2::new(15.0, 15.0));
        assert_eq!(rect.max(), Vec2::new(85.0, 85.0));
    }

    #[test]
    fn test_wall_tag_fallback() {
        assert_eq!(WallTag::from_token("RED"), WallTag::Red);
        assert_eq!(WallTag::from_token("grey"), WallTag::Gray);
        assert_eq!(WallTag::from_token("chartreuse"), WallTag::Blue);
    }
}
