//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Grid`](crate::Grid). Rules are kept apart from
//! grid storage so the session and the invariant checks share one definition
//! of "terminal".

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::is_full;
pub use lines::{Line, lines};
pub use win::{evaluate_winner, winning_line};

use crate::phases::Outcome;
use crate::types::Grid;
use tracing::instrument;

/// Terminal outcome of a grid, if any.
///
/// A won line takes precedence over a full grid.
#[instrument(skip(grid), fields(size = grid.size().get()))]
pub fn evaluate(grid: &Grid) -> Option<Outcome> {
    if let Some(winner) = evaluate_winner(grid) {
        return Some(Outcome::Winner(winner));
    }
    is_full(grid).then_some(Outcome::Tie)
}
