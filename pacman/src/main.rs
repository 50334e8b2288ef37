#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use std::env;

use anyhow::Context;
use pacman::audio::LoggingAudio;
use pacman::config::Config;
use pacman::formatter::CustomFormatter;
use pacman::input::Autopilot;
use pacman::maze::layout::Level;
use pacman::maze::parser::MazeParser;
use pacman::render::HudRenderer;
use pacman::score::HighScoreStore;
use pacman::session::Session;
use pacman::state::GameState;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn setup_tracing() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().event_format(CustomFormatter))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(ErrorLayer::default())
        .try_init()
        .context("Could not install the tracing subscriber")
}

/// Runs one headless session driven by the autopilot.
pub fn main() -> anyhow::Result<()> {
    setup_tracing()?;

    let mut config = Config::from_env_and_args(env::args().skip(1))?;

    // Always run from a known seed so a session can be replayed.
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    config.seed = Some(seed);
    info!(seed, "Starting Pac-Man");

    let level = match &config.maze_path {
        Some(path) => Level::with_maze(MazeParser::load_maze(path)),
        None => Level::classic(),
    };

    let high_score = HighScoreStore::new(config.high_score_path.clone()).load();
    let mut rng = SmallRng::seed_from_u64(seed);
    let state = GameState::new(level, config.lives, high_score, config.turn_policy(), &mut rng);

    let mut audio = LoggingAudio::new();
    audio.set_mute(config.mute);

    let mut session = Session::new(state, config, audio, HudRenderer::default(), Autopilot::new(seed));
    let stage = session.run();
    info!(?stage, "Goodbye");

    Ok(())
}
