//! Error types for the board model and session.

use crate::types::Coord;
use derive_more::{Display, Error};

/// A grid could not be constructed with the requested shape.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// Boards need at least one cell.
    #[display("Board size must be at least 1")]
    ZeroSize,

    /// The cell count of a board this wide does not fit in `usize`.
    #[display("Board size {size} is too large")]
    TooLarge {
        /// Requested dimension.
        size: usize,
    },

    /// A row's length does not match the number of rows.
    #[display("Row {row} has {found} cells, expected {expected}")]
    NotSquare {
        /// Offending row index.
        row: usize,
        /// Required row length.
        expected: usize,
        /// Actual row length.
        found: usize,
    },
}

/// Why a placement was ignored.
///
/// None of these are failures of the game: the session is unchanged and the
/// caller may try a different cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// The coordinate is not on the board.
    #[display("Cell {coord} is off the board")]
    OutOfBounds {
        /// Requested cell.
        coord: Coord,
    },

    /// The cell already holds a mark.
    #[display("Cell {coord} is already occupied")]
    Occupied {
        /// Requested cell.
        coord: Coord,
    },

    /// The game has ended; restart to play again.
    #[display("Game is already over")]
    GameOver,
}

/// Input that is not a `row,col` pair.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Expected `row,col`, got `{input}`")]
pub struct CoordParseError {
    /// The rejected text.
    pub input: String,
}

impl CoordParseError {
    /// Creates a parse error for the given input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
