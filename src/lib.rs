//! Tic-tac-toe hosts built on [`tictactoe_board`].
//!
//! # Architecture
//!
//! - **Config**: [`GameConfig`], loaded from TOML with CLI overrides
//! - **Dispatch**: [`SessionDispatcher`] serializes every activation through
//!   one task that owns the [`Session`](tictactoe_board::Session)
//! - **Hosts**: the terminal UI ([`run_tui`]) and headless [`replay`]
//!
//! # Example
//!
//! ```
//! use tictactoe::{Activation, GameConfig, replay};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default();
//! let moves: Vec<Activation> = ["0,0", "1,1", "0,1"]
//!     .iter()
//!     .map(|s| s.parse::<Activation>())
//!     .collect::<Result<_, _>>()?;
//! let report = replay(config.new_session(), &moves).await?;
//! assert_eq!(report.applied, 3);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod dispatch;
mod replay;
mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig, MAX_BOARD_SIZE};
pub use dispatch::{
    DispatchError, SessionCommand, SessionDispatcher, SessionHandle, SessionWorker, join_worker,
};
pub use replay::{Activation, ActivationParseError, ReplayReport, replay};
pub use tui::{Action, App, Direction, map_key, move_cursor, run_tui};
