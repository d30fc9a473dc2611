//! Balanced marks invariant: players take turns, starting player first.

use super::Invariant;
use crate::session::Session;

/// Invariant: the starting player has placed as many marks as the opponent,
/// or exactly one more.
pub struct BalancedMarksInvariant;

impl Invariant<Session> for BalancedMarksInvariant {
    fn holds(session: &Session) -> bool {
        let starting = session.starting_player();
        let first = session.grid().count(starting);
        let second = session.grid().count(starting.opponent());
        first == second || first == second + 1
    }

    fn description() -> &'static str {
        "Starting player has the same number of marks as the opponent, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coord, Mark, Player};

    #[test]
    fn test_empty_session_holds() {
        assert!(BalancedMarksInvariant::holds(&Session::default()));
    }

    #[test]
    fn test_alternating_moves_hold() {
        let mut session = Session::standard(Player::O);
        for (row, col) in [(0, 0), (0, 1), (0, 2), (1, 0)] {
            session.place_mark(row, col);
            assert!(BalancedMarksInvariant::holds(&session));
        }
    }

    #[test]
    fn test_opponent_ahead_violates() {
        let mut session = Session::default();
        session.grid.set(Coord::new(0, 0), Mark::Occupied(Player::O));
        assert!(!BalancedMarksInvariant::holds(&session));
    }

    #[test]
    fn test_starting_player_two_ahead_violates() {
        let mut session = Session::default();
        session.grid.set(Coord::new(0, 0), Mark::Occupied(Player::X));
        session.grid.set(Coord::new(0, 1), Mark::Occupied(Player::X));
        assert!(!BalancedMarksInvariant::holds(&session));
    }
}
