#![allow(dead_code)]

use glam::Vec2;
use pacman::ghost::TurnPolicy;
use pacman::maze::layout::Level;
use pacman::maze::{Maze, Rect, WallTag};
use pacman::state::GameState;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Where test sessions put Pac-Man, well away from every test ghost.
pub const PLAYER_START: Vec2 = Vec2::new(100.0, 100.0);

/// Ghost spawns in the far corner, outside the ghost house.
pub const PARKED_GHOSTS: [Vec2; 4] = [
    Vec2::new(1300.0, 700.0),
    Vec2::new(1400.0, 700.0),
    Vec2::new(1300.0, 800.0),
    Vec2::new(1400.0, 800.0),
];

/// A fruit nobody reaches, so the session keeps running.
pub const SPARE_FRUIT: Vec2 = Vec2::new(700.0, 800.0);

pub fn rng() -> SmallRng {
    SmallRng::seed_from_u64(0x5EED)
}

/// The four outer walls of the board and nothing else.
pub fn boundary_maze() -> Maze {
    Maze::new([
        (Rect::new(0.0, 0.0, 10.0, 890.0), WallTag::Blue),
        (Rect::new(1520.0, 0.0, 10.0, 890.0), WallTag::Blue),
        (Rect::new(0.0, 0.0, 1530.0, 10.0), WallTag::Blue),
        (Rect::new(0.0, 880.0, 1530.0, 10.0), WallTag::Blue),
    ])
}

/// A level holding only the spare fruit; tests add what they need.
pub fn bare_level(maze: Maze) -> Level {
    Level {
        maze,
        player_spawn: PLAYER_START,
        ghost_spawns: PARKED_GHOSTS,
        fruits: vec![SPARE_FRUIT],
        power_pellets: Vec::new(),
        super_pellets: Vec::new(),
        keys: Vec::new(),
        star: Vec2::new(1000.0, 100.0),
    }
}

/// A running game over `level` where every ghost stands perfectly still.
pub fn frozen_ghost_state(level: Level, lives: u8) -> GameState {
    let mut state = GameState::new(level, lives, 0, TurnPolicy::LegalOnly, &mut rng());
    for ghost in state.ghosts.iter_mut() {
        *ghost = ghost.clone().with_speed(0.0);
    }
    state
}
