//! Tic-tac-toe board model and game session.
//!
//! # Architecture
//!
//! - **Board model**: [`Grid`], [`Mark`], and the pure rules in [`rules`]
//!   (line enumeration, [`evaluate_winner`], [`is_full`]).
//! - **Session**: [`Session`], the only stateful piece. Turn-taking,
//!   termination, and restart.
//! - **Contracts**: placement pre/postconditions and session invariants,
//!   checked in debug builds.
//! - **Render**: cell labels and banner text for presentation layers.
//!
//! # Example
//!
//! ```
//! use tictactoe_board::{Player, Session};
//!
//! let mut session = Session::standard(Player::X);
//! assert!(session.place_mark(1, 1));
//! assert!(!session.place_mark(1, 1));
//! assert_eq!(session.active_player(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod error;
mod invariants;
mod phases;
mod render;
mod session;
mod snapshot;
mod types;

pub mod rules;

pub use contracts::{
    CellIsEmpty, CellOnBoard, Contract, GameInProgress, LegalPlacement, PlacementContract,
};
pub use error::{CoordParseError, GridError, PlaceError};
pub use invariants::{
    BalancedMarksInvariant, Invariant, InvariantSet, InvariantViolation, SessionInvariants,
    TerminalPhaseInvariant, TurnOrderInvariant,
};
pub use phases::{Outcome, Phase};
pub use render::{RESTART_LABEL, banner, status_line};
pub use rules::{Line, evaluate, evaluate_winner, is_full, lines, winning_line};
pub use session::{Placement, Session};
pub use snapshot::Snapshot;
pub use types::{BoardSize, Coord, Grid, Mark, Player};
