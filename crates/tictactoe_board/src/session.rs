//! Game session state machine.
//!
//! A [`Session`] owns the grid, whose turn it is, and whether the game has
//! ended. It only changes through [`Session::try_place`] (or its boolean
//! form [`Session::place_mark`]) and [`Session::restart`].

use crate::contracts::{Contract, PlacementContract};
use crate::error::PlaceError;
use crate::phases::{Outcome, Phase};
use crate::rules;
use crate::snapshot::Snapshot;
use crate::types::{BoardSize, Coord, Grid, Mark, Player};
use tracing::{debug, info, instrument};

/// What an applied placement did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Game continues; `next` is now the active player.
    Continue {
        /// Player to move next.
        next: Player,
    },
    /// The placement ended the game.
    Ended(Outcome),
}

/// A single game of tic-tac-toe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub(crate) grid: Grid,
    pub(crate) starting_player: Player,
    pub(crate) active_player: Player,
    pub(crate) phase: Phase,
}

impl Session {
    /// Creates a session with an empty grid and `starting_player` to move.
    #[instrument]
    pub fn new(size: BoardSize, starting_player: Player) -> Self {
        Self {
            grid: Grid::empty(size),
            starting_player,
            active_player: starting_player,
            phase: Phase::InProgress,
        }
    }

    /// Creates a 3x3 session.
    pub fn standard(starting_player: Player) -> Self {
        Self::new(BoardSize::STANDARD, starting_player)
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the board dimension.
    pub fn size(&self) -> BoardSize {
        self.grid.size()
    }

    /// Returns the player whose mark the next placement writes.
    ///
    /// After the game ends this is the player who made the final move.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Returns the player every game of this session starts with.
    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true once the game is won or tied.
    pub fn is_ended(&self) -> bool {
        self.phase.is_ended()
    }

    /// Returns the outcome once ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.phase.outcome()
    }

    /// Returns the winner, or `None` while in progress or after a tie.
    pub fn winner(&self) -> Option<Player> {
        self.outcome().and_then(|outcome| outcome.winner())
    }

    /// Places the active player's mark at `coord`.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaceError`] describing why the placement was ignored. The
    /// session is left untouched in that case.
    #[instrument(skip_all, fields(coord = %coord, player = %self.active_player))]
    pub fn try_place(&mut self, coord: Coord) -> Result<Placement, PlaceError> {
        PlacementContract::pre(self, &coord).inspect_err(|reason| {
            debug!(%reason, "Placement ignored");
        })?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.active_player;
        self.grid.set(coord, Mark::Occupied(player));

        let placement = match rules::evaluate(&self.grid) {
            Some(outcome) => {
                self.phase = Phase::Ended(outcome);
                info!(?outcome, "Game ended");
                Placement::Ended(outcome)
            }
            None => {
                self.active_player = player.opponent();
                Placement::Continue {
                    next: self.active_player,
                }
            }
        };

        #[cfg(debug_assertions)]
        PlacementContract::assert_post(&before, self);

        Ok(placement)
    }

    /// Places the active player's mark at (`row`, `col`).
    ///
    /// Returns whether the placement was applied. Occupied cells, coordinates
    /// off the board, and placements after the game ended are ignored.
    pub fn place_mark(&mut self, row: usize, col: usize) -> bool {
        self.try_place(Coord::new(row, col)).is_ok()
    }

    /// Clears the grid and hands the first move back to the starting player.
    #[instrument(skip(self), fields(starting_player = %self.starting_player))]
    pub fn restart(&mut self) {
        self.grid = Grid::empty(self.grid.size());
        self.active_player = self.starting_player;
        self.phase = Phase::InProgress;
        info!("Game restarted");
    }

    /// Owned copy of everything a presentation layer reads.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.grid.clone(), self.active_player, self.phase)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::standard(Player::X)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_in_progress() {
        let session = Session::standard(Player::O);
        assert_eq!(session.active_player(), Player::O);
        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(session.winner(), None);
        assert_eq!(*session.grid(), Grid::empty(BoardSize::STANDARD));
    }

    #[test]
    fn test_try_place_reports_next_player() {
        let mut session = Session::default();
        assert_eq!(
            session.try_place(Coord::new(1, 1)),
            Ok(Placement::Continue { next: Player::O })
        );
        assert_eq!(
            session.grid().get(Coord::new(1, 1)),
            Some(Mark::Occupied(Player::X))
        );
    }

    #[test]
    fn test_try_place_reasons() {
        let mut session = Session::default();
        assert_eq!(
            session.try_place(Coord::new(3, 0)),
            Err(PlaceError::OutOfBounds {
                coord: Coord::new(3, 0)
            })
        );
        session.try_place(Coord::new(0, 0)).unwrap();
        assert_eq!(
            session.try_place(Coord::new(0, 0)),
            Err(PlaceError::Occupied {
                coord: Coord::new(0, 0)
            })
        );
    }

    #[test]
    fn test_game_over_rejects_everything() {
        let mut session = Session::new(BoardSize::new(1).unwrap(), Player::O);
        assert_eq!(
            session.try_place(Coord::new(0, 0)),
            Ok(Placement::Ended(Outcome::Winner(Player::O)))
        );
        assert_eq!(session.try_place(Coord::new(0, 0)), Err(PlaceError::GameOver));
        assert_eq!(session.try_place(Coord::new(5, 5)), Err(PlaceError::GameOver));
    }

    #[test]
    fn test_ending_move_keeps_active_player() {
        let mut session = Session::default();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            assert!(session.place_mark(row, col));
        }
        assert!(session.is_ended());
        assert_eq!(session.winner(), Some(Player::X));
        assert_eq!(session.active_player(), Player::X);
    }

    #[test]
    fn test_restart_keeps_board_size() {
        let mut session = Session::new(BoardSize::new(4).unwrap(), Player::X);
        session.place_mark(3, 3);
        session.restart();
        assert_eq!(session.size().get(), 4);
        assert_eq!(*session.grid(), Grid::empty(BoardSize::new(4).unwrap()));
    }
}
