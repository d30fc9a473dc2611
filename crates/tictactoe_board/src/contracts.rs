//! Contract-based validation for placements.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P(state, action)} action {Q(before, after)}`.

use crate::error::PlaceError;
use crate::invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use crate::session::Session;
use crate::types::{Coord, Mark};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), PlaceError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Placement Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not ended.
pub struct GameInProgress;

impl GameInProgress {
    /// Rejects placements on an ended session.
    pub fn check(session: &Session) -> Result<(), PlaceError> {
        if session.is_ended() {
            Err(PlaceError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the coordinate is on the board.
pub struct CellOnBoard;

impl CellOnBoard {
    /// Rejects coordinates outside the grid.
    pub fn check(coord: Coord, session: &Session) -> Result<(), PlaceError> {
        if session.grid().contains(coord) {
            Ok(())
        } else {
            Err(PlaceError::OutOfBounds { coord })
        }
    }
}

/// Precondition: the cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects occupied cells.
    pub fn check(coord: Coord, session: &Session) -> Result<(), PlaceError> {
        if session.grid().is_empty_at(coord) {
            Ok(())
        } else {
            Err(PlaceError::Occupied { coord })
        }
    }
}

/// Composite precondition: a placement is legal if the game is running and
/// the cell is an empty cell of the board.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates all preconditions, reporting the first that fails.
    #[instrument(skip(session))]
    pub fn check(coord: Coord, session: &Session) -> Result<(), PlaceError> {
        GameInProgress::check(session)?;
        CellOnBoard::check(coord, session)?;
        CellIsEmpty::check(coord, session)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Placement Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions:
/// - Game in progress
/// - Cell on the board and empty
///
/// Postconditions:
/// - Cells are write-once: every mark present before is still there
/// - Exactly one new cell holds the previously active player's mark
/// - Session invariants hold
pub struct PlacementContract;

impl PlacementContract {
    /// Checks the postconditions and panics on violation.
    ///
    /// A violation means the session itself is broken, not that the caller
    /// passed bad input.
    pub fn assert_post(before: &Session, after: &Session) {
        if let Err(violations) = Self::post(before, after) {
            for violation in &violations {
                warn!(violation = %violation.description, "Placement postcondition failed");
            }
            panic!("Placement postconditions violated: {violations:?}");
        }
    }
}

impl Contract<Session, Coord> for PlacementContract {
    fn pre(session: &Session, coord: &Coord) -> Result<(), PlaceError> {
        LegalPlacement::check(*coord, session)
    }

    fn post(before: &Session, after: &Session) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        let placed = Mark::Occupied(before.active_player());
        let mut filled = 0;
        for (old, new) in before.grid().cells().iter().zip(after.grid().cells()) {
            if old.is_empty() {
                if !new.is_empty() {
                    filled += 1;
                    if *new != placed {
                        violations.push(InvariantViolation::new(
                            "New mark belongs to the previously active player",
                        ));
                    }
                }
            } else if old != new {
                violations.push(InvariantViolation::new("Cells are write-once"));
            }
        }
        if filled != 1 {
            violations.push(InvariantViolation::new(format!(
                "Exactly one cell filled per placement (found {filled})"
            )));
        }

        if let Err(found) = SessionInvariants::check_all(after) {
            violations.extend(found);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
