//! Command-line interface for tictactoe.

use crate::replay::Activation;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_board::Player;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Board dimension (overrides the config file)
    #[arg(long, global = true)]
    pub size: Option<usize>,

    /// Player who moves first, X or O (overrides the config file)
    #[arg(long, global = true)]
    pub first: Option<Player>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply activations in order and print the final board
    Replay {
        /// Activations: `row,col` (zero-based) or `restart`
        activations: Vec<Activation>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_board::Coord;

    #[test]
    fn test_play_with_overrides() {
        let cli = Cli::try_parse_from(["tictactoe", "play", "--size", "4", "--first", "o"]).unwrap();
        assert!(matches!(cli.command, Command::Play));
        assert_eq!(cli.size, Some(4));
        assert_eq!(cli.first, Some(Player::O));
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_replay_activations() {
        let cli = Cli::try_parse_from(["tictactoe", "replay", "0,0", "restart", "2,1"]).unwrap();
        match cli.command {
            Command::Replay { activations } => assert_eq!(
                activations,
                vec![
                    Activation::Cell(Coord::new(0, 0)),
                    Activation::Restart,
                    Activation::Cell(Coord::new(2, 1)),
                ]
            ),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_bad_activation_rejected() {
        assert!(Cli::try_parse_from(["tictactoe", "replay", "center"]).is_err());
        assert!(Cli::try_parse_from(["tictactoe", "play", "--first", "Z"]).is_err());
    }
}
