//! The per-frame update.
//!
//! [`update_frame`] runs the steps below in a fixed order. Each step takes only
//! the pieces of state it touches and reports what happened as [`GameEvent`]s,
//! so every step can be driven on its own.
//!
//! 1. Pac-Man moves, super mode and invincibility tick.
//! 2. Fruit, power pellets (and the frightened window), super pellets (and
//!    key-wall tunnelling), the star, keys.
//! 3. Ghosts move and are checked against Pac-Man.
//! 4. The win check.

use glam::Vec2;
use rand::Rng;
use tracing::{debug, info, trace};

use crate::collectable::Collectable;
use crate::constants::ghost::FRIGHTENED_TIME;
use crate::constants::player::TUNNEL_REACH;
use crate::constants::score;
use crate::direction::Direction;
use crate::events::GameEvent;
use crate::ghost::{respawn_all, set_all_frightened, Ghost};
use crate::maze::Maze;
use crate::player::Player;
use crate::score::ScoreBoard;
use crate::star::StarGame;
use crate::state::{GameState, Lives};

/// How the ghost step ended for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhostOutcome {
    /// Nothing session-ending happened.
    Continue,
    /// A life was lost and there are lives left.
    LifeLost,
    /// The last life was lost.
    OutOfLives,
}

/// Advances the whole game by one frame.
///
/// Does nothing once the session has stopped running.
pub fn update_frame(state: &mut GameState, dt: f32, intent: Option<Direction>, rng: &mut impl Rng) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_game_running() {
        return events;
    }

    state.clock.tick(dt);
    let now = state.clock.elapsed();

    state.player.advance(&state.maze, dt, intent);
    if state.player.update_super_mode(dt) {
        events.push(GameEvent::SuperModeEnded);
    }
    state.player.update_invincibility(dt);

    update_fruits(&mut state.fruits, &state.player, &mut state.score, &mut events);
    update_power_pellets(
        &mut state.power_pellets,
        &state.player,
        &mut state.ghosts,
        &mut state.frightened_since,
        now,
        &mut state.score,
        &mut events,
    );
    update_frightened_window(&mut state.ghosts, &mut state.frightened_since, now, &mut events);
    update_super_pellets(
        &mut state.super_pellets,
        &mut state.player,
        &state.keys,
        &mut state.maze,
        &mut state.score,
        &mut events,
    );
    update_star(&mut state.star, &state.player, dt, rng, &mut state.score, &mut events);
    update_keys(&mut state.keys, &state.player, &mut state.maze, &mut state.score, &mut events);

    let outcome = update_ghosts(
        &mut state.ghosts,
        &mut state.player,
        &state.maze,
        &mut state.lives,
        dt,
        rng,
        &mut state.score,
        &mut events,
    );

    if outcome == GhostOutcome::OutOfLives {
        state.finish(false);
        events.push(GameEvent::GameOver);
    } else if all_collected(&state.fruits) {
        state.finish(true);
        events.push(GameEvent::GameWon);
    }

    events
}

/// Fruit contact: collect and score.
pub fn update_fruits(fruits: &mut [Collectable], player: &Player, score: &mut ScoreBoard, events: &mut Vec<GameEvent>) {
    for fruit in fruits.iter_mut() {
        if fruit.collect_if_touching(player.position(), player.radius()) {
            score.add_points(score::FRUIT);
            events.push(GameEvent::FruitEaten);
        }
    }
}

/// Power pellet contact: collect, score, frighten every ghost and (re)start the frightened window.
pub fn update_power_pellets(
    pellets: &mut [Collectable],
    player: &Player,
    ghosts: &mut [Ghost],
    frightened_since: &mut Option<f32>,
    now: f32,
    score: &mut ScoreBoard,
    events: &mut Vec<GameEvent>,
) {
    for pellet in pellets.iter_mut() {
        if !pellet.collect_if_touching(player.position(), player.radius()) {
            continue;
        }

        score.add_points(score::POWER_PELLET);
        events.push(GameEvent::PowerPelletEaten);

        set_all_frightened(ghosts, true);
        *frightened_since = Some(now);
        events.push(GameEvent::GhostsFrightened);
        debug!(at = now, "Power pellet eaten, ghosts frightened");
    }
}

/// Calms every ghost once more than the frightened duration has passed since the last power pellet.
pub fn update_frightened_window(
    ghosts: &mut [Ghost],
    frightened_since: &mut Option<f32>,
    now: f32,
    events: &mut Vec<GameEvent>,
) {
    let Some(since) = *frightened_since else {
        return;
    };

    if now - since > FRIGHTENED_TIME {
        set_all_frightened(ghosts, false);
        *frightened_since = None;
        events.push(GameEvent::GhostsCalmed);
        debug!(at = now, "Frightened window over");
    }
}

/// Super pellet contact: collect, score and enter super mode.
///
/// While super, Pac-Man also breaks through any key wall he touches (tested
/// with a slightly enlarged circle), without needing the key.
pub fn update_super_pellets(
    pellets: &mut [Collectable],
    player: &mut Player,
    keys: &[Collectable],
    maze: &mut Maze,
    score: &mut ScoreBoard,
    events: &mut Vec<GameEvent>,
) {
    for pellet in pellets.iter_mut() {
        if pellet.collect_if_touching(player.position(), player.radius()) {
            score.add_points(score::SUPER_PELLET);
            player.activate_super_mode();
            events.push(GameEvent::SuperPelletEaten);
        }
    }

    if player.is_super() {
        tunnel_key_walls(keys, maze, player.position(), player.radius() * TUNNEL_REACH, events);
    }
}

/// Opens every key wall the given circle overlaps.
fn tunnel_key_walls(keys: &[Collectable], maze: &mut Maze, pos: Vec2, reach: f32, events: &mut Vec<GameEvent>) {
    for key in keys {
        for &wall in key.unlocks() {
            if maze.circle_intersects_wall(wall, pos, reach) && maze.unlock(wall) {
                debug!(wall, "Super mode tunnelled through wall");
                events.push(GameEvent::WallUnlocked(wall));
            }
        }
    }
}

/// Star minigame: advance its timers and collect the star on contact.
pub fn update_star(
    star: &mut StarGame,
    player: &Player,
    dt: f32,
    rng: &mut impl Rng,
    score: &mut ScoreBoard,
    events: &mut Vec<GameEvent>,
) {
    if let Some(event) = star.update(dt, rng) {
        events.push(event);
    }

    if let Some(bonus) = star.try_collect(player.position(), player.radius()) {
        score.add_points(bonus);
        events.push(GameEvent::StarCollected { bonus });
    }
}

/// Key contact: collect, score and open the key's walls.
pub fn update_keys(
    keys: &mut [Collectable],
    player: &Player,
    maze: &mut Maze,
    score: &mut ScoreBoard,
    events: &mut Vec<GameEvent>,
) {
    for key in keys.iter_mut() {
        if !key.check_collision(player.position(), player.radius()) {
            continue;
        }

        let opened = key.collect_key(maze);
        score.add_points(score::KEY);
        events.push(GameEvent::KeyCollected);
        events.extend(opened.iter().map(|&wall| GameEvent::WallUnlocked(wall)));
        debug!(walls = ?opened.as_slice(), "Key collected");
    }
}

/// Moves each ghost and resolves its contact with Pac-Man.
///
/// A frightened ghost is eaten (and sent home). Any other ghost is harmless
/// to a super or invincible Pac-Man; otherwise Pac-Man loses a life, every
/// ghost goes home, and the rest of the ghosts skip this frame.
#[allow(clippy::too_many_arguments)]
pub fn update_ghosts(
    ghosts: &mut [Ghost],
    player: &mut Player,
    maze: &Maze,
    lives: &mut Lives,
    dt: f32,
    rng: &mut impl Rng,
    score: &mut ScoreBoard,
    events: &mut Vec<GameEvent>,
) -> GhostOutcome {
    for index in 0..ghosts.len() {
        let ghost = &mut ghosts[index];
        ghost.advance(maze, player, dt, rng);

        if !ghost.collides_with_player(player) {
            continue;
        }

        if ghost.is_frightened() {
            ghost.set_eaten(true);
            ghost.respawn();
            score.add_points(score::GHOST);
            events.push(GameEvent::GhostEaten(index));
            debug!(ghost = ghost.kind().as_ref(), "Ghost eaten");
            continue;
        }

        if player.is_super() || player.is_invincible() {
            trace!(ghost = ghost.kind().as_ref(), "Ghost passed through protected player");
            continue;
        }

        let remaining = lives.lose();
        events.push(GameEvent::LifeLost { remaining });
        respawn_all(ghosts);
        info!(remaining, "Life lost");

        if remaining == 0 {
            return GhostOutcome::OutOfLives;
        }
        player.set_invincible(true);
        return GhostOutcome::LifeLost;
    }

    GhostOutcome::Continue
}

/// True once every collectable in the slice has been taken.
pub fn all_collected(collectables: &[Collectable]) -> bool {
    collectables.iter().all(|collectable| !collectable.is_active())
}
