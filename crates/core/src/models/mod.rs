//! Shared domain models.

use std::fmt;

use crate::error::DrawError;

/// Number of rows in the bingo grid.
pub const GRID_ROWS: usize = 9;
/// Number of columns in the bingo grid.
pub const GRID_COLUMNS: usize = 10;
/// Largest number on the board; tokens run from 1 to this value.
pub const TOKEN_COUNT: u8 = 90;

/// One numbered cell of the board, guaranteed to be in `1..=90`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NumberToken(u8);

impl NumberToken {
    /// Validate a raw value and wrap it as a token.
    pub fn new(value: u8) -> Result<Self, DrawError> {
        if (1..=TOKEN_COUNT).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DrawError::InvalidToken(value))
        }
    }

    /// Build the token displayed at the given grid position.
    pub fn at(row: usize, col: usize) -> Option<Self> {
        if row >= GRID_ROWS || col >= GRID_COLUMNS {
            return None;
        }
        Some(Self((row * GRID_COLUMNS + col + 1) as u8))
    }

    /// Iterate over every token in ascending order.
    pub fn all() -> impl Iterator<Item = NumberToken> {
        (1..=TOKEN_COUNT).map(NumberToken)
    }

    /// Raw number printed on the cell.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Zero-based slot used for per-token lookup tables.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Grid row holding this token.
    pub fn row(self) -> usize {
        self.index() / GRID_COLUMNS
    }

    /// Grid column holding this token.
    pub fn col(self) -> usize {
        self.index() % GRID_COLUMNS
    }
}

impl fmt::Display for NumberToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for NumberToken {
    type Error = DrawError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
