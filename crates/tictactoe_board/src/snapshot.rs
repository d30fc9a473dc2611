//! Read-only view of a session for presentation layers.

use crate::phases::{Outcome, Phase};
use crate::rules::{self, Line};
use crate::types::{Grid, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Owned copy of the state a presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// The grid at the time of the snapshot.
    grid: Grid,
    /// Player to move, or the last mover once ended.
    active_player: Player,
    /// Lifecycle phase.
    phase: Phase,
}

impl Snapshot {
    /// Creates a snapshot.
    pub fn new(grid: Grid, active_player: Player, phase: Phase) -> Self {
        Self {
            grid,
            active_player,
            phase,
        }
    }

    /// Returns true once the game is won or tied.
    pub fn is_ended(&self) -> bool {
        self.phase.is_ended()
    }

    /// Returns the outcome once ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.phase.outcome()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.outcome().and_then(|outcome| outcome.winner())
    }

    /// The completed line, for highlighting.
    pub fn winning_line(&self) -> Option<Line> {
        self.winner()?;
        rules::winning_line(&self.grid).map(|(line, _)| line)
    }
}
