//! Centralized error types for the Pac-Man game.
//!
//! Very little in the simulation core can fail: missing files and bad input
//! degrade to defaults. These types describe the failures that are reported
//! (and then absorbed) at the edges: maze loading, score persistence and
//! configuration.

use std::io;
use std::path::PathBuf;

/// Main error type for the Pac-Man game.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Maze parsing error: {0}")]
    MazeParse(#[from] ParseError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Error type for maze file parsing.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Line {line}: expected at least 4 numeric fields, found {found}")]
    MissingFields { line: usize, found: usize },

    #[error("Line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },

    #[error("Line {line}: wall size must be positive, got {width}x{height}")]
    InvalidSize { line: usize, width: f32, height: f32 },
}

/// Errors from reading or writing the high score file.
#[derive(thiserror::Error, Debug)]
pub enum PersistenceError {
    #[error("Could not access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("High score file {path} does not contain a number: '{content}'")]
    Garbled { path: PathBuf, content: String },
}

/// Errors from assembling the runtime configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to extract configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("Invalid value for '{flag}': {value}")]
    InvalidArgument { flag: String, value: String },

    #[error("Missing value for '{0}'")]
    MissingArgument(String),

    #[error("A session needs at least one life")]
    NoLives,
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
