//! Maze parsing functionality for converting wall listings into collision geometry.
//!
//! A maze file holds one wall per line: `x y width height [color]`. Blank
//! lines and lines starting with `#` are ignored. Unknown colours fall back to
//! the default tag.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{GameResult, ParseError};
use crate::maze::{Maze, Rect, WallTag};

/// Parser for converting wall listings into structured maze data.
pub struct MazeParser;

impl MazeParser {
    /// Parses a single line of a maze listing.
    ///
    /// # Arguments
    ///
    /// * `line_number` - The 1-based line number, used for error reporting
    /// * `line` - The raw line
    ///
    /// # Returns
    ///
    /// `Ok(None)` for blank and comment lines, the wall otherwise.
    pub fn parse_line(line_number: usize, line: &str) -> Result<Option<(Rect, WallTag)>, ParseError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 4 {
            return Err(ParseError::MissingFields {
                line: line_number,
                found: tokens.len(),
            });
        }

        let mut numbers = [0.0f32; 4];
        for (slot, token) in numbers.iter_mut().zip(&tokens) {
            *slot = token.parse().map_err(|_| ParseError::InvalidNumber {
                line: line_number,
                token: token.to_string(),
            })?;
        }

        let [x, y, width, height] = numbers;
        if width <= 0.0 || height <= 0.0 {
            return Err(ParseError::InvalidSize {
                line: line_number,
                width,
                height,
            });
        }

        let tag = tokens.get(4).map_or(WallTag::default(), |token| WallTag::from_token(token));
        Ok(Some((Rect::new(x, y, width, height), tag)))
    }

    /// Parses a whole listing, skipping (and logging) malformed lines.
    pub fn parse_maze(source: &str) -> Maze {
        let mut walls = Vec::new();
        for (index, line) in source.lines().enumerate() {
            match Self::parse_line(index + 1, line) {
                Ok(Some(wall)) => walls.push(wall),
                Ok(None) => {}
                Err(error) => warn!(%error, "Skipping malformed maze line"),
            }
        }
        Maze::new(walls)
    }

    /// Reads and parses a maze listing, failing only if the file cannot be read.
    pub fn try_load_maze(path: &Path) -> GameResult<Maze> {
        let source = fs::read_to_string(path)?;
        debug!(path = %path.display(), "Loading maze file");
        Ok(Self::parse_maze(&source))
    }

    /// Loads a maze listing from disk.
    ///
    /// An unreadable file yields an empty maze rather than an error.
    pub fn load_maze(path: &Path) -> Maze {
        Self::try_load_maze(path).unwrap_or_else(|error| {
            warn!(path = %path.display(), %error, "Could not read maze file, continuing without walls");
            Maze::empty()
        })
    }
}
