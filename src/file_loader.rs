//! File loading and validation utilities for fixed-format maze files.
//!
//! A maze file holds exactly [`FILE_HEIGHT`] non-blank lines of exactly [`FILE_WIDTH`] characters
//! drawn from the alphabet of [`Cell`]. Blank lines anywhere in the input are skipped.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use log::{debug, warn};
use thiserror::Error;

use crate::{
    labyrinth::{MazeGrid, FILE_HEIGHT, FILE_WIDTH},
    types::{Cell, Position},
};

/// Reasons a maze file can be rejected.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input held no non-blank line at all.
    #[error("the maze file is empty")]
    Empty,
    /// The line count or the width of the first line differs from the fixed maze size.
    #[error("invalid maze dimensions: expected 19x10, found {width}x{height}")]
    Dimensions {
        /// Character count of the first line.
        width: usize,
        /// Number of non-blank lines.
        height: usize,
    },
    /// A line is not as wide as the first one.
    #[error("line {line} is {width} characters wide, unlike the first line")]
    RaggedLine {
        /// One-based index of the offending line among the non-blank lines.
        line: usize,
        /// Character count of the offending line.
        width: usize,
    },
    /// A character outside the maze alphabet was found.
    #[error("unexpected symbol {symbol:?} at row {row}, column {col}")]
    InvalidSymbol {
        /// Row of the offending character.
        row: usize,
        /// Column of the offending character.
        col: usize,
        /// The offending character.
        symbol: char,
    },
    /// No `S` cell was found.
    #[error("the maze has no start cell")]
    MissingStart,
    /// No `E` cell was found.
    #[error("the maze has no end cell")]
    MissingEnd,
    /// The underlying reader failed.
    #[error("failed to read the maze")]
    Io(#[from] io::Error),
}

/// Parses a maze from the contents of a maze file.
///
/// When several `S` or `E` characters are present the last one in reading order becomes the
/// entry or exit.
///
/// Validation is strict: a character outside the `#`, space, `S`, `E`, `+` alphabet is rejected
/// instead of being read as a corridor, and a file without an entry or an exit is rejected
/// instead of being solved from a default position.
///
/// # Errors
///
/// Returns a [`LoadError`] when the input is empty, has the wrong size, contains unknown symbols
/// or lacks an entry or exit.
pub fn parse_maze(input: &str) -> Result<MazeGrid, LoadError> {
    let lines: Vec<&str> = input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    build(&lines)
}

/// Reads a maze from any buffered reader, such as an embedded resource or standard input.
///
/// # Errors
///
/// Returns [`LoadError::Io`] when reading fails and any other [`LoadError`] the contents
/// trigger.
pub fn load_reader<Reader>(reader: Reader) -> Result<MazeGrid, LoadError>
where
    Reader: BufRead,
{
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }

    build(&lines)
}

/// Reads a maze from a file on disk.
///
/// # Errors
///
/// Returns [`LoadError::Io`] when the file cannot be opened or read and any other [`LoadError`]
/// its contents trigger.
pub fn load_path(path: &Path) -> Result<MazeGrid, LoadError> {
    debug!("loading maze from {}", path.display());

    let grid = load_reader(BufReader::new(File::open(path)?)).inspect_err(|err| {
        warn!("rejected maze file {}: {err}", path.display());
    })?;

    Ok(grid)
}

/// Validates the non-blank lines of a maze file and builds the grid.
fn build<Line>(lines: &[Line]) -> Result<MazeGrid, LoadError>
where
    Line: AsRef<str>,
{
    let Some(first_line) = lines.first() else {
        return Err(LoadError::Empty);
    };

    let height = lines.len();
    let width = first_line.as_ref().chars().count();
    if height != FILE_HEIGHT || width != FILE_WIDTH {
        return Err(LoadError::Dimensions { width, height });
    }

    let mut cells = Vec::with_capacity(height * width);
    let mut start = None;
    let mut end = None;

    for (row, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let line_width = line.chars().count();
        if line_width != width {
            return Err(LoadError::RaggedLine {
                line: row + 1,
                width: line_width,
            });
        }

        for (col, symbol) in line.chars().enumerate() {
            let cell = Cell::from_symbol(symbol)
                .ok_or(LoadError::InvalidSymbol { row, col, symbol })?;
            match cell {
                Cell::Start => start = Some(Position::new(row, col)),
                Cell::End => end = Some(Position::new(row, col)),
                Cell::Wall | Cell::Open | Cell::Marked => {}
            }
            cells.push(cell);
        }
    }

    let start = start.ok_or(LoadError::MissingStart)?;
    let end = end.ok_or(LoadError::MissingEnd)?;

    Ok(MazeGrid::from_parts(height, width, cells, start, end))
}
