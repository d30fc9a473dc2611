//! Line enumeration for square boards of any size.

use crate::types::{BoardSize, Coord};
use serde::{Deserialize, Serialize};

/// A row, column, or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row `r`, left to right.
    Row(usize),
    /// Column `c`, top to bottom.
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// Cells along this line on a board of the given size.
    pub fn cells(self, size: BoardSize) -> impl Iterator<Item = Coord> {
        let n = size.get();
        (0..n).map(move |i| match self {
            Line::Row(row) => Coord::new(row, i),
            Line::Column(col) => Coord::new(i, col),
            Line::Diagonal => Coord::new(i, i),
            Line::AntiDiagonal => Coord::new(i, n - 1 - i),
        })
    }

    /// Returns true if the coordinate lies on this line.
    pub fn contains(self, coord: Coord, size: BoardSize) -> bool {
        let n = size.get();
        if coord.row >= n || coord.col >= n {
            return false;
        }
        match self {
            Line::Row(row) => coord.row == row,
            Line::Column(col) => coord.col == col,
            Line::Diagonal => coord.row == coord.col,
            Line::AntiDiagonal => coord.row + coord.col == n - 1,
        }
    }
}

/// All lines of a board, in evaluation order.
///
/// Rows top to bottom, then columns left to right, then the two diagonals.
/// A board of size `n` has `2n + 2` lines.
pub fn lines(size: BoardSize) -> impl Iterator<Item = Line> {
    let n = size.get();
    (0..n)
        .map(Line::Row)
        .chain((0..n).map(Line::Column))
        .chain([Line::Diagonal, Line::AntiDiagonal])
}
