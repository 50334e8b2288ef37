use std::path::PathBuf;

use pacman::audio::{LoggingAudio, NullAudio};
use pacman::config::Config;
use pacman::direction::Direction;
use pacman::events::{GameEvent, Sound};
use pacman::input::{Autopilot, ScriptedInput};
use pacman::maze::layout::Level;
use pacman::maze::Maze;
use pacman::render::NullRenderer;
use pacman::score::HighScoreStore;
use pacman::session::{Session, Stage};
use pacman::state::GameState;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

use common::{bare_level, frozen_ghost_state, PLAYER_START};

fn score_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pacman-session-{name}-{}.txt", std::process::id()))
}

fn test_config(name: &str) -> Config {
    Config {
        skip_start: true,
        realtime: false,
        seed: Some(7),
        high_score_path: score_path(name),
        ..Config::default()
    }
}

fn session(state: GameState, config: Config) -> Session<LoggingAudio, NullRenderer, ScriptedInput> {
    Session::new(state, config, LoggingAudio::new(), NullRenderer, ScriptedInput::default())
}

#[test]
fn test_ready_screen_counts_down() {
    let config = Config {
        skip_start: false,
        ..test_config("ready")
    };
    let mut session = session(frozen_ghost_state(bare_level(Maze::empty()), 3), config);

    assert_that(&matches!(session.stage(), Stage::Ready { .. })).is_true();
    assert_that(&session.step(1.0).is_empty()).is_true();
    assert_that(&matches!(session.stage(), Stage::Ready { .. })).is_true();
    session.step(1.0);
    assert_eq!(session.stage(), Stage::Playing);

    // Nothing moved while waiting
    assert_that(&session.state().clock.elapsed()).is_equal_to(0.0);
}

#[test]
fn test_skip_start_goes_straight_to_play() {
    let session = session(frozen_ghost_state(bare_level(Maze::empty()), 3), test_config("skip"));

    assert_eq!(session.stage(), Stage::Playing);
}

#[test]
fn test_win_plays_cues_and_stops() {
    let mut level = bare_level(Maze::empty());
    level.fruits = vec![PLAYER_START];
    let mut session = session(frozen_ghost_state(level, 3), test_config("win-step"));

    let events = session.step(0.1);

    assert_eq!(events, vec![GameEvent::FruitEaten, GameEvent::GameWon]);
    assert_eq!(session.stage(), Stage::Won);
    assert_that(&session.audio().count(Sound::Pellet)).is_equal_to(1);
    assert_that(&session.audio().count(Sound::Win)).is_equal_to(1);

    let frames = session.frames();
    assert_that(&session.step(0.1).is_empty()).is_true();
    assert_that(&session.frames()).is_equal_to(frames);
}

#[test]
fn test_muted_session_still_reports_events() {
    let mut level = bare_level(Maze::empty());
    level.fruits = vec![PLAYER_START];
    let mut session = Session::new(
        frozen_ghost_state(level, 3),
        test_config("silent"),
        NullAudio,
        NullRenderer,
        ScriptedInput::default(),
    );

    let events = session.step(0.1);

    assert_eq!(events, vec![GameEvent::FruitEaten, GameEvent::GameWon]);
    assert_eq!(session.stage(), Stage::Won);
}

#[test]
fn test_loss_plays_cues() {
    let mut state = frozen_ghost_state(bare_level(Maze::empty()), 1);
    state.ghosts[0].set_position(PLAYER_START);
    let mut session = session(state, test_config("loss"));

    session.step(0.1);

    assert_eq!(session.stage(), Stage::Lost);
    assert_that(&session.audio().count(Sound::LifeLost)).is_equal_to(1);
    assert_that(&session.audio().count(Sound::Lose)).is_equal_to(1);
}

#[test]
fn test_scripted_input_drives_pacman() {
    let state = frozen_ghost_state(bare_level(common::boundary_maze()), 3);
    let mut session = Session::new(
        state,
        test_config("scripted"),
        LoggingAudio::new(),
        NullRenderer,
        ScriptedInput::hold(Direction::Down, 2),
    );

    for _ in 0..4 {
        session.step(0.1);
    }

    assert_eq!(session.state().player.position(), PLAYER_START + glam::Vec2::new(0.0, 50.0));
}

#[test]
fn test_run_stops_at_frame_limit() {
    let config = Config {
        max_frames: Some(10),
        ..test_config("limit")
    };
    let path = config.high_score_path.clone();
    let mut session = session(frozen_ghost_state(bare_level(Maze::empty()), 3), config);

    let stage = session.run();

    assert_eq!(stage, Stage::Playing);
    assert_that(&session.frames()).is_equal_to(10);
    // No points, so nothing is written
    assert_that(&path.exists()).is_false();
}

#[test]
fn test_run_saves_new_high_score() {
    let mut level = bare_level(Maze::empty());
    level.fruits = vec![PLAYER_START];
    let config = test_config("high");
    let store = HighScoreStore::new(config.high_score_path.clone());
    let mut session = session(frozen_ghost_state(level, 3), config);

    let stage = session.run();
    let saved = store.load();
    std::fs::remove_file(store.path()).unwrap();

    assert_eq!(stage, Stage::Won);
    assert_that(&saved).is_equal_to(10);
}

#[test]
fn test_autopilot_session_finishes_or_hits_limit() {
    let config = Config {
        max_frames: Some(600),
        ..test_config("autopilot")
    };
    let path = config.high_score_path.clone();
    let state = GameState::new(Level::classic(), 3, 0, config.turn_policy(), &mut common::rng());
    let mut session = Session::new(state, config, LoggingAudio::new(), NullRenderer, Autopilot::new(7));

    session.run();

    assert_that(&session.frames()).is_less_than_or_equal_to(600);
    assert_that(&session.state().score.current_score()).is_greater_than(0);
    let _ = std::fs::remove_file(path);
}
