use super::error::ChessError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A board coordinate.
///
/// `row` counts from Black's back rank: row 0 holds Black's pieces at the
/// start of the game and row 7 holds White's. `col` 0 is the a-file. The
/// algebraic square `"e2"` therefore maps to `(row 6, col 4)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Result<Self, ChessError> {
        if row > 7 || col > 7 {
            return Err(ChessError::InvalidSquare(format!(
                "row and col must be 0-7, got ({row}, {col})"
            )));
        }
        Ok(Self { row, col })
    }

    /// Create a square without validation (for internal use when bounds are
    /// guaranteed)
    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Square offset by `(d_row, d_col)`, or `None` if it leaves the board.
    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    // Convert col to file character (0 -> 'a', 1 -> 'b', etc.)
    pub fn file_char(&self) -> char {
        (self.col + b'a') as char
    }

    // Convert row to rank digit (row 7 -> '1', row 0 -> '8')
    pub fn rank_char(&self) -> char {
        (b'8' - self.row) as char
    }

    /// Iterate over all 64 squares.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square { row, col }))
    }
}

// Display as algebraic notation ("e2")
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ChessError::InvalidSquare(format!(
                "square must be exactly 2 characters (e.g. 'e4'), got '{s}'"
            )));
        };

        let file = file.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return Err(ChessError::InvalidSquare(format!(
                "invalid file '{file}', must be a-h"
            )));
        }
        if !('1'..='8').contains(&rank) {
            return Err(ChessError::InvalidSquare(format!(
                "invalid rank '{rank}', must be 1-8"
            )));
        }

        Ok(Square {
            row: b'8' - rank as u8,
            col: file as u8 - b'a',
        })
    }
}
