//! Turn order invariant: the active player agrees with the marks on the grid.

use super::Invariant;
use crate::session::Session;

/// Invariant: the active player is whoever the mark counts say moves next.
///
/// Once the game has ended the active player is the one who made the final
/// move, so the expectation flips.
pub struct TurnOrderInvariant;

impl Invariant<Session> for TurnOrderInvariant {
    fn holds(session: &Session) -> bool {
        let starting = session.starting_player();
        let first = session.grid().count(starting);
        let second = session.grid().count(starting.opponent());

        let next = if first == second {
            starting
        } else {
            starting.opponent()
        };

        if session.is_ended() {
            session.active_player() == next.opponent()
        } else {
            session.active_player() == next
        }
    }

    fn description() -> &'static str {
        "Active player matches the alternation from the starting player"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phases::Phase;
    use crate::types::Player;

    #[test]
    fn test_holds_through_a_whole_game() {
        let mut session = Session::standard(Player::O);
        assert!(TurnOrderInvariant::holds(&session));
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            session.place_mark(row, col);
            assert!(TurnOrderInvariant::holds(&session));
        }
        assert_eq!(session.winner(), Some(Player::O));
    }

    #[test]
    fn test_wrong_active_player_violates() {
        let mut session = Session::default();
        session.active_player = Player::O;
        assert!(!TurnOrderInvariant::holds(&session));
    }

    #[test]
    fn test_flipping_after_end_violates() {
        let mut session = Session::default();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            session.place_mark(row, col);
        }
        assert!(matches!(session.phase(), Phase::Ended(_)));
        session.active_player = Player::O;
        assert!(!TurnOrderInvariant::holds(&session));
    }
}
