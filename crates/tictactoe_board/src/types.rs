//! Core domain types for tic-tac-toe.

use crate::error::{CoordParseError, GridError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (conventionally the first player).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// The value occupying a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell claimed by a player.
    Occupied(Player),
}

impl Mark {
    /// Returns the owning player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Occupied(player) => Some(player),
        }
    }

    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        Mark::Occupied(player)
    }
}

/// Validated board dimension (always at least 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    /// The classic 3x3 board.
    pub const STANDARD: BoardSize = BoardSize(3);

    /// Creates a board size, rejecting zero and sizes whose cell count
    /// overflows `usize`.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        if size.checked_mul(size).is_none() {
            return Err(GridError::TooLarge { size });
        }
        Ok(Self(size))
    }

    /// Returns the dimension.
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of cells on a board of this size.
    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = GridError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// Zero-based cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Coord {
    type Err = CoordParseError;

    /// Parses `"row,col"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| CoordParseError::new(s))?;
        let row = row.trim().parse().map_err(|_| CoordParseError::new(s))?;
        let col = col.trim().parse().map_err(|_| CoordParseError::new(s))?;
        Ok(Self { row, col })
    }
}

/// Square grid of marks, stored row-major. The dimension is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Mark>>", into = "Vec<Vec<Mark>>")]
pub struct Grid {
    size: BoardSize,
    cells: Vec<Mark>,
}

impl Grid {
    /// Creates a grid with every cell empty.
    #[instrument]
    pub fn empty(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Mark::Empty; size.cell_count()],
        }
    }

    /// Builds a grid from explicit rows.
    ///
    /// Rejects empty input and rows whose length differs from the row count.
    #[instrument(skip(rows), fields(rows = rows.len()))]
    pub fn from_rows(rows: Vec<Vec<Mark>>) -> Result<Self, GridError> {
        let size = BoardSize::new(rows.len())?;
        let mut cells = Vec::with_capacity(size.cell_count());
        for (row, marks) in rows.into_iter().enumerate() {
            if marks.len() != size.get() {
                return Err(GridError::NotSquare {
                    row,
                    expected: size.get(),
                    found: marks.len(),
                });
            }
            cells.extend(marks);
        }
        Ok(Self { size, cells })
    }

    /// Returns the dimension.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size.get() && coord.col < self.size.get()
    }

    /// Gets the mark at a coordinate, or `None` when out of bounds.
    pub fn get(&self, coord: Coord) -> Option<Mark> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Returns true if the coordinate is on the board and unclaimed.
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.get(coord) == Some(Mark::Empty)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Mark] {
        &self.cells
    }

    /// Iterates rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.cells.chunks(self.size.get())
    }

    /// Counts the cells claimed by a player.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|mark| **mark == Mark::Occupied(player))
            .count()
    }

    /// Mark at an in-bounds coordinate.
    ///
    /// Callers guarantee the coordinate came from this grid's own lines.
    pub(crate) fn mark_at(&self, coord: Coord) -> Mark {
        self.cells[coord.row * self.size.get() + coord.col]
    }

    /// Writes a mark. Returns false when out of bounds.
    pub(crate) fn set(&mut self, coord: Coord, mark: Mark) -> bool {
        match self.index(coord) {
            Some(i) => {
                self.cells[i] = mark;
                true
            }
            None => false,
        }
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.row * self.size.get() + coord.col)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty(BoardSize::STANDARD)
    }
}

impl TryFrom<Vec<Vec<Mark>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Mark>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Mark>> {
    fn from(grid: Grid) -> Self {
        grid.rows().map(<[Mark]>::to_vec).collect()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.size.get();
        let rule = vec!["-"; n].join("+");
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f, "{}", rule)?;
            }
            let labels: Vec<&str> = row
                .iter()
                .map(|mark| match mark.label() {
                    "" => " ",
                    label => label,
                })
                .collect();
            write!(f, "{}", labels.join("|"))?;
        }
        Ok(())
    }
}
