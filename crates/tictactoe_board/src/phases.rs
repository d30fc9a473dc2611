//! Session phases and terminal outcomes.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Winner(Player),
    /// Grid filled with no completed line.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the game was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    #[default]
    InProgress,
    /// Game over; only restart changes the session.
    Ended(Outcome),
}

impl Phase {
    /// Returns the outcome once ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Phase::InProgress => None,
            Phase::Ended(outcome) => Some(*outcome),
        }
    }

    /// Returns true once a terminal condition was reached.
    pub fn is_ended(&self) -> bool {
        matches!(self, Phase::Ended(_))
    }
}
