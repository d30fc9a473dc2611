//! Full-board detection for tic-tac-toe.

use crate::types::Grid;
use tracing::instrument;

/// Checks if the grid is full (no empty cell left).
///
/// A full grid with no winner is a tie.
#[instrument(skip(grid), fields(size = grid.size().get()))]
pub fn is_full(grid: &Grid) -> bool {
    grid.cells().iter().all(|mark| !mark.is_empty())
}
