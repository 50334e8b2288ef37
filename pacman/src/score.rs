//! Score keeping and high score persistence.
//!
//! The high score is a single integer in a plain text file. A missing or
//! unreadable file simply means there is no high score yet.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thousands::Separable;
use tracing::{debug, warn};

use crate::error::PersistenceError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    current: u32,
    high: u32,
}

impl ScoreBoard {
    pub fn new(high: u32) -> Self {
        Self { current: 0, high }
    }

    /// Adds points to the current score, raising the high score if it is passed.
    pub fn add_points(&mut self, points: u32) {
        self.current = self.current.saturating_add(points);
        if self.current > self.high {
            self.high = self.current;
        }
    }

    pub fn current_score(&self) -> u32 {
        self.current
    }

    pub fn high_score(&self) -> u32 {
        self.high
    }

    /// True once this session has set a new high score.
    pub fn is_new_high(&self, previous_high: u32) -> bool {
        self.current > previous_high
    }
}

/// Formats a score with thousands separators, e.g. `12,340`.
pub fn format_score(score: u32) -> String {
    score.separate_with_commas()
}

/// Reads and writes the high score file.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored high score, reporting exactly what went wrong.
    pub fn try_load(&self) -> Result<u32, PersistenceError> {
        let content = fs::read_to_string(&self.path).map_err(|source| PersistenceError::Io {
            path: self.path.clone(),
            source,
        })?;

        let trimmed = content.trim();
        trimmed.parse().map_err(|_| PersistenceError::Garbled {
            path: self.path.clone(),
            content: trimmed.to_string(),
        })
    }

    /// Reads the stored high score. Anything other than a clean read counts as zero.
    pub fn load(&self) -> u32 {
        match self.try_load() {
            Ok(score) => {
                debug!(score, path = %self.path.display(), "Loaded high score");
                score
            }
            Err(PersistenceError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No high score file yet");
                0
            }
            Err(error) => {
                warn!(%error, "Could not load high score, starting from zero");
                0
            }
        }
    }

    /// Overwrites the stored high score.
    pub fn save(&self, score: u32) -> Result<(), PersistenceError> {
        fs::write(&self.path, format!("{score}\n")).map_err(|source| PersistenceError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(score, path = %self.path.display(), "Saved high score");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_points_raises_high() {
        let mut board = ScoreBoard::new(100);
        board.add_points(60);
        assert_eq!(board.high_score(), 100);
        board.add_points(60);
        assert_eq!(board.current_score(), 120);
        assert_eq!(board.high_score(), 120);
        assert!(board.is_new_high(100));
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0), "0");
        assert_eq!(format_score(12340), "12,340");
    }
}
