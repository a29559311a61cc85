//! Grid State Store
//!
//! Letters and color annotations for the fixed 6x5 guess board.

pub mod color;
pub mod letter;
pub mod store;

use thiserror::Error;

pub use color::CellColor;
pub use letter::{sanitize, Letter};
pub use store::{Cell, GridStore};

/// Number of guess rows on the board
pub const ROWS: usize = 6;
/// Number of letters per guess
pub const COLS: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {ROWS}x{COLS} grid")]
    OutOfBounds { row: usize, col: usize },
}

pub type GridResult<T> = Result<T, GridError>;

/// A cell coordinate that is always on the board.
///
/// Only [`Position::new`] and [`Position::all`] build one, so store
/// operations taking a `Position` cannot go out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> GridResult<Self> {
        if row >= ROWS || col >= COLS {
            return Err(GridError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Every cell, row-major
    pub fn all() -> impl Iterator<Item = Position> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| Position { row, col }))
    }
}
