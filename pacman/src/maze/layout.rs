//! The built-in level: wall listing plus where everything starts.

use glam::Vec2;
use smallvec::{smallvec, SmallVec};

use crate::constants::{collectable::FRUIT_RADIUS, ghost, player};
use crate::maze::parser::MazeParser;
use crate::maze::Maze;

/// The wall listing of the built-in maze, in the maze file format.
pub const CLASSIC_MAZE: &str = include_str!("../../assets/maze.txt");

/// Index of the gate between the two left blocks of the top row.
pub const NORTH_GATE: usize = 4;
/// Index of the gate between the two right blocks of the lower row.
pub const SOUTH_GATE: usize = 5;

/// Fruit is laid out on a grid with this spacing...
const FRUIT_GRID_STEP: usize = 100;
const FRUIT_GRID_ORIGIN: Vec2 = Vec2::new(60.0, 60.0);
/// ...wherever a circle this large fits without touching a wall.
const FRUIT_CLEARANCE: f32 = FRUIT_RADIUS - 5.0;
/// No fruit this close to Pac-Man's spawn, so the first frame never scores.
const SPAWN_KEEP_OUT: f32 = 60.0;

/// A key and the walls it opens.
#[derive(Debug, Clone, PartialEq)]
pub struct KeySpec {
    pub pos: Vec2,
    pub unlocks: SmallVec<[usize; 4]>,
}

/// Everything needed to start a session.
#[derive(Debug, Clone)]
pub struct Level {
    pub maze: Maze,
    pub player_spawn: Vec2,
    pub ghost_spawns: [Vec2; 4],
    pub fruits: Vec<Vec2>,
    pub power_pellets: Vec<Vec2>,
    pub super_pellets: Vec<Vec2>,
    pub keys: Vec<KeySpec>,
    pub star: Vec2,
}

impl Level {
    /// The built-in level.
    pub fn classic() -> Self {
        Self::with_maze(MazeParser::parse_maze(CLASSIC_MAZE))
    }

    /// The built-in item layout over an arbitrary maze.
    ///
    /// Fruit placement adapts to the walls; pellets, keys and the star keep
    /// their fixed spots.
    pub fn with_maze(maze: Maze) -> Self {
        let fruits = place_fruit(&maze);

        Self {
            player_spawn: player::SPAWN,
            ghost_spawns: ghost::SPAWNS,
            fruits,
            power_pellets: vec![
                Vec2::new(60.0, 60.0),
                Vec2::new(1470.0, 60.0),
                Vec2::new(60.0, 830.0),
                Vec2::new(1470.0, 830.0),
            ],
            super_pellets: vec![Vec2::new(765.0, 800.0), Vec2::new(1470.0, 300.0)],
            keys: vec![
                KeySpec {
                    pos: Vec2::new(1470.0, 800.0),
                    unlocks: smallvec![NORTH_GATE],
                },
                KeySpec {
                    pos: Vec2::new(60.0, 800.0),
                    unlocks: smallvec![SOUTH_GATE],
                },
            ],
            star: Vec2::new(1270.0, 560.0),
            maze,
        }
    }
}

/// Lays fruit on the grid, skipping walls, the ghost house and the player's spawn.
fn place_fruit(maze: &Maze) -> Vec<Vec2> {
    let mut fruits = Vec::new();
    let max = crate::constants::BOARD_SIZE - FRUIT_GRID_ORIGIN;

    let mut x = FRUIT_GRID_ORIGIN.x;
    while x <= max.x {
        let mut y = FRUIT_GRID_ORIGIN.y;
        while y <= max.y {
            let pos = Vec2::new(x, y);
            if !in_ghost_house_area(pos)
                && pos.distance(player::SPAWN) > SPAWN_KEEP_OUT
                && !maze.circle_intersects_walls(pos, FRUIT_CLEARANCE)
            {
                fruits.push(pos);
            }
            y += FRUIT_GRID_STEP as f32;
        }
        x += FRUIT_GRID_STEP as f32;
    }

    fruits
}

/// The ghost house plus its walls.
fn in_ghost_house_area(pos: Vec2) -> bool {
    const MARGIN: f32 = 20.0;
    pos.x > ghost::HOME_MIN.x - MARGIN
        && pos.x < ghost::HOME_MAX.x + MARGIN
        && pos.y > ghost::HOME_MIN.y - MARGIN
        && pos.y < ghost::HOME_MAX.y + MARGIN
}
