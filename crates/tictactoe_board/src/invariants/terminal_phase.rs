//! Terminal phase invariant: the phase matches what the grid says.

use super::Invariant;
use crate::rules;
use crate::session::Session;

/// Invariant: a session is ended exactly when its grid is won or full, and
/// the recorded outcome is the one the rules compute.
pub struct TerminalPhaseInvariant;

impl Invariant<Session> for TerminalPhaseInvariant {
    fn holds(session: &Session) -> bool {
        rules::evaluate(session.grid()) == session.outcome()
    }

    fn description() -> &'static str {
        "Session is ended exactly when the grid is won or full"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phases::{Outcome, Phase};
    use crate::types::Player;

    #[test]
    fn test_new_session_holds() {
        assert!(TerminalPhaseInvariant::holds(&Session::default()));
    }

    #[test]
    fn test_premature_end_violates() {
        let mut session = Session::default();
        session.phase = Phase::Ended(Outcome::Tie);
        assert!(!TerminalPhaseInvariant::holds(&session));
    }

    #[test]
    fn test_missed_win_violates() {
        let mut session = Session::default();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            session.place_mark(row, col);
        }
        assert!(TerminalPhaseInvariant::holds(&session));
        session.phase = Phase::InProgress;
        assert!(!TerminalPhaseInvariant::holds(&session));
        session.phase = Phase::Ended(Outcome::Winner(Player::O));
        assert!(!TerminalPhaseInvariant::holds(&session));
    }
}
