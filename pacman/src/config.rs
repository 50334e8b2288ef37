//! Runtime configuration.
//!
//! Values come from built-in defaults, then `PACMAN_`-prefixed environment
//! variables, then command line flags.

use std::path::PathBuf;

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::DEFAULT_LIVES;
use crate::error::{ConfigError, GameResult};
use crate::ghost::TurnPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Wall listing to load instead of the built-in maze.
    pub maze_path: Option<PathBuf>,
    pub high_score_path: PathBuf,
    /// Start playing immediately instead of showing the ready screen.
    pub skip_start: bool,
    pub seed: Option<u64>,
    pub lives: u8,
    /// Stop after this many frames even if the game is still running.
    pub max_frames: Option<u64>,
    /// Pace frames to the wall clock.
    pub realtime: bool,
    pub mute: bool,
    /// Let a ghost's random turn pick a blocked direction, as early releases did.
    pub legacy_random_turns: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            maze_path: None,
            high_score_path: PathBuf::from("highscore.txt"),
            skip_start: false,
            seed: None,
            lives: DEFAULT_LIVES,
            max_frames: None,
            realtime: true,
            mute: false,
            legacy_random_turns: false,
        }
    }
}

impl Config {
    /// Defaults merged with the process environment.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed("PACMAN_"))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Config = figment.extract().map_err(Box::new)?;
        config.validate()?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Loads from the environment, then applies the command line over it.
    pub fn from_env_and_args<I, S>(args: I) -> GameResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::assemble(Self::figment(), args)
    }

    /// `figment` with the command line applied on top.
    pub fn assemble<I, S>(figment: Figment, args: I) -> GameResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::from_figment(figment)?;
        config.apply_args(args)?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.lives == 0 {
            return Err(ConfigError::NoLives);
        }
        Ok(())
    }

    /// Applies command line flags on top of the loaded values.
    ///
    /// Accepts `--skip-start`, `--mute`, `--fast`, `--seed <n>` and `--frames <n>`.
    pub fn apply_args<I, S>(&mut self, args: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--skip-start" => self.skip_start = true,
                "--mute" => self.mute = true,
                "--fast" => self.realtime = false,
                "--seed" => self.seed = Some(parse_value(&flag, args.next())?),
                "--frames" => self.max_frames = Some(parse_value(&flag, args.next())?),
                _ => {
                    return Err(ConfigError::InvalidArgument {
                        value: "unknown flag".to_string(),
                        flag,
                    })
                }
            }
        }
        Ok(())
    }

    pub fn turn_policy(&self) -> TurnPolicy {
        if self.legacy_random_turns {
            TurnPolicy::Legacy
        } else {
            TurnPolicy::LegalOnly
        }
    }
}

fn parse_value(flag: &str, value: Option<String>) -> Result<u64, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingArgument(flag.to_string()))?;
    value.parse().map_err(|_| ConfigError::InvalidArgument {
        flag: flag.to_string(),
        value,
    })
}
