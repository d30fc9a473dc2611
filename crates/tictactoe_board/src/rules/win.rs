//! Win detection logic for tic-tac-toe.

use super::lines::{Line, lines};
use crate::types::{Grid, Mark, Player};
use tracing::instrument;

/// Finds the first line fully owned by one player.
///
/// Lines are searched in [`lines`] order, so a grid with several won lines
/// always reports the same one.
#[instrument(skip(grid), fields(size = grid.size().get()))]
pub fn winning_line(grid: &Grid) -> Option<(Line, Player)> {
    lines(grid.size()).find_map(|line| line_owner(grid, line).map(|player| (line, player)))
}

/// Checks if there is a winner on the grid.
///
/// Returns `Some(player)` if the player holds every cell of some line,
/// `None` otherwise.
#[instrument(skip(grid), fields(size = grid.size().get()))]
pub fn evaluate_winner(grid: &Grid) -> Option<Player> {
    winning_line(grid).map(|(_, player)| player)
}

fn line_owner(grid: &Grid, line: Line) -> Option<Player> {
    let mut cells = line.cells(grid.size()).map(|coord| grid.mark_at(coord));
    let owner = cells.next()?.player()?;
    cells
        .all(|mark| mark == Mark::Occupied(owner))
        .then_some(owner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoardSize, Coord};

    const X: Mark = Mark::Occupied(Player::X);
    const O: Mark = Mark::Occupied(Player::O);
    const E: Mark = Mark::Empty;

    fn grid(rows: Vec<Vec<Mark>>) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate_winner(&Grid::empty(BoardSize::STANDARD)), None);
    }

    #[test]
    fn test_every_standard_line_wins() {
        let size = BoardSize::STANDARD;
        for line in lines(size) {
            let mut board = Grid::empty(size);
            for coord in line.cells(size) {
                board.set(coord, O);
            }
            assert_eq!(winning_line(&board), Some((line, Player::O)), "{line:?}");
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = grid(vec![vec![X, X, E], vec![E, O, E], vec![E, E, O]]);
        assert_eq!(evaluate_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = grid(vec![vec![X, O, X], vec![E, E, E], vec![E, E, E]]);
        assert_eq!(evaluate_winner(&board), None);
    }

    #[test]
    fn test_row_reported_before_column() {
        // X owns row 0 and column 0 at once.
        let board = grid(vec![vec![X, X, X], vec![X, O, O], vec![X, O, E]]);
        assert_eq!(winning_line(&board), Some((Line::Row(0), Player::X)));
    }

    #[test]
    fn test_earlier_row_wins_over_later_row() {
        // Unreachable in play: O owns row 1, X owns row 2.
        let board = grid(vec![vec![E, E, E], vec![O, O, O], vec![X, X, X]]);
        assert_eq!(winning_line(&board), Some((Line::Row(1), Player::O)));
    }

    #[test]
    fn test_column_reported_before_diagonal() {
        let board = grid(vec![vec![O, E, X], vec![E, X, X], vec![X, E, X]]);
        assert_eq!(winning_line(&board), Some((Line::Column(2), Player::X)));
    }

    #[test]
    fn test_repeated_evaluation_is_stable() {
        let board = grid(vec![vec![O, X, X], vec![E, O, X], vec![X, E, O]]);
        let first = winning_line(&board);
        for _ in 0..10 {
            assert_eq!(winning_line(&board), first);
        }
        assert_eq!(first, Some((Line::Diagonal, Player::O)));
    }

    #[test]
    fn test_four_by_four_needs_full_line() {
        let size = BoardSize::new(4).unwrap();
        let mut board = Grid::empty(size);
        for col in 0..3 {
            board.set(Coord::new(0, col), X);
        }
        assert_eq!(evaluate_winner(&board), None);
        board.set(Coord::new(0, 3), X);
        assert_eq!(evaluate_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_single_cell_board() {
        let size = BoardSize::new(1).unwrap();
        let mut board = Grid::empty(size);
        assert_eq!(evaluate_winner(&board), None);
        board.set(Coord::new(0, 0), O);
        assert_eq!(winning_line(&board), Some((Line::Row(0), Player::O)));
    }
}
