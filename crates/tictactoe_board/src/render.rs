//! Text shown by presentation layers.

use crate::phases::{Outcome, Phase};
use crate::types::{Mark, Player};

/// Caption of the restart affordance.
pub const RESTART_LABEL: &str = "Play again?";

impl Mark {
    /// Cell text: `""` for empty, otherwise the player's symbol.
    pub fn label(self) -> &'static str {
        match self {
            Mark::Empty => "",
            Mark::Occupied(Player::X) => "X",
            Mark::Occupied(Player::O) => "O",
        }
    }
}

/// Banner shown once the game has ended.
pub fn banner(outcome: Outcome) -> String {
    match outcome {
        Outcome::Winner(player) => format!("Player {player} has won the game!"),
        Outcome::Tie => "It's a tie!".to_string(),
    }
}

/// One-line status: the banner when ended, otherwise whose turn it is.
pub fn status_line(phase: Phase, active_player: Player) -> String {
    match phase {
        Phase::Ended(outcome) => banner(outcome),
        Phase::InProgress => format!("Player {active_player} to move"),
    }
}
