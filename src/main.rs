//! Tic-tac-toe CLI.

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tictactoe::{Activation, Cli, Command, GameConfig, replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config =
        GameConfig::load(cli.config.as_deref())?.with_overrides(cli.size, cli.first)?;

    match cli.command {
        Command::Play => play(&config).await,
        Command::Replay { activations } => run_replay(&config, &activations).await,
    }
}

/// Run the interactive terminal game.
async fn play(config: &GameConfig) -> Result<()> {
    // Log to a file so output does not interfere with the TUI
    init_file_logging(config.log_file())?;
    run_tui(config).await
}

/// Replay activations headlessly and print the final board.
async fn run_replay(config: &GameConfig, activations: &[Activation]) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(std::io::stderr)
        .init();

    info!(activations = activations.len(), "Starting replay");
    let report = replay(config.new_session(), activations).await?;
    println!("{}", report);
    Ok(())
}

fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
