//! Headless host: applies a list of activations and reports the result.

use crate::dispatch::{DispatchError, SessionDispatcher, join_worker};
use derive_more::{Display, Error, From};
use std::str::FromStr;
use tictactoe_board::{Coord, CoordParseError, Session, Snapshot, status_line};
use tracing::{info, instrument, warn};

/// One user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Activate the cell at a coordinate.
    Cell(Coord),
    /// Request a new game.
    Restart,
}

/// Text that is neither `row,col` nor `restart`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
#[display("Expected `row,col` or `restart`: {source}")]
pub struct ActivationParseError {
    source: CoordParseError,
}

impl FromStr for Activation {
    type Err = ActivationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("restart") {
            return Ok(Activation::Restart);
        }
        Ok(Activation::Cell(s.parse()?))
    }
}

/// What happened during a replay.
#[derive(Debug, Clone)]
pub struct ReplayReport {
    /// Placements that changed the board.
    pub applied: usize,
    /// Cells whose activation was ignored, in order.
    pub ignored: Vec<Coord>,
    /// Restarts performed.
    pub restarts: usize,
    /// Final state.
    pub snapshot: Snapshot,
}

impl std::fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.snapshot.grid())?;
        writeln!(f)?;
        write!(
            f,
            "{}",
            status_line(*self.snapshot.phase(), *self.snapshot.active_player())
        )
    }
}

/// Feeds `activations` through a dispatcher in order.
#[instrument(skip_all, fields(activations = activations.len()))]
pub async fn replay(
    session: Session,
    activations: &[Activation],
) -> Result<ReplayReport, DispatchError> {
    let (handle, worker) = SessionDispatcher::new(session);
    let worker_task = tokio::spawn(worker.run());

    let mut applied = 0;
    let mut ignored = Vec::new();
    let mut restarts = 0;
    for activation in activations {
        match *activation {
            Activation::Cell(coord) => match handle.try_place(coord).await? {
                Ok(_) => applied += 1,
                Err(reason) => {
                    warn!(%coord, %reason, "Activation ignored");
                    ignored.push(coord);
                }
            },
            Activation::Restart => {
                handle.restart().await?;
                restarts += 1;
            }
        }
    }

    let snapshot = handle.snapshot().await?;
    drop(handle);
    join_worker(worker_task).await;

    info!(applied, ignored = ignored.len(), restarts, "Replay finished");
    Ok(ReplayReport {
        applied,
        ignored,
        restarts,
        snapshot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_board::Player;

    fn parse(items: &[&str]) -> Vec<Activation> {
        items.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_parse_activation() {
        assert_eq!("restart".parse::<Activation>(), Ok(Activation::Restart));
        assert_eq!("RESTART".parse::<Activation>(), Ok(Activation::Restart));
        assert_eq!(
            "2,1".parse::<Activation>(),
            Ok(Activation::Cell(Coord::new(2, 1)))
        );
        assert!("middle".parse::<Activation>().is_err());
    }

    #[tokio::test]
    async fn test_replay_win_reports_banner() {
        let activations = parse(&["0,0", "1,0", "0,1", "1,1", "0,2", "2,2"]);
        let report = replay(Session::standard(Player::X), &activations)
            .await
            .unwrap();
        assert_eq!(report.applied, 5);
        assert_eq!(report.ignored, vec![Coord::new(2, 2)]);
        assert!(report.to_string().ends_with("Player X has won the game!"));
    }

    #[tokio::test]
    async fn test_replay_restart_clears_board() {
        let activations = parse(&["1,1", "1,1", "restart", "0,0"]);
        let report = replay(Session::standard(Player::O), &activations)
            .await
            .unwrap();
        assert_eq!(report.applied, 2);
        assert_eq!(report.restarts, 1);
        assert_eq!(report.ignored, vec![Coord::new(1, 1)]);
        assert_eq!(
            report.to_string(),
            "O| | \n-+-+-\n | | \n-+-+-\n | | \n\nPlayer X to move"
        );
    }
}
