//! Game configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_board::{BoardSize, Player, Session};
use tracing::{debug, info, instrument};

/// Largest board the terminal UI lays out.
pub const MAX_BOARD_SIZE: usize = 9;

/// Settings for a game session and its host.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Board dimension (3 for classic tic-tac-toe).
    #[serde(default)]
    board_size: BoardSize,

    /// Player who moves first in every game.
    #[serde(default = "default_starting_player")]
    starting_player: Player,

    /// Where the terminal UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_starting_player() -> Player {
    Player::X
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::default(),
            starting_player: default_starting_player(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(
            board_size = %config.board_size,
            starting_player = %config.starting_player,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides on top of the loaded values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        board_size: Option<usize>,
        starting_player: Option<Player>,
    ) -> Result<Self, ConfigError> {
        if let Some(size) = board_size {
            self.board_size = BoardSize::new(size)
                .map_err(|e| ConfigError::new(format!("Invalid board size {}: {}", size, e)))?;
        }
        if let Some(player) = starting_player {
            self.starting_player = player;
        }
        self.validate()?;
        Ok(self)
    }

    /// Creates a fresh session from these settings.
    pub fn new_session(&self) -> Session {
        Session::new(self.board_size, self.starting_player)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size.get() > MAX_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "board_size must be at most {}, got {}",
                MAX_BOARD_SIZE,
                self.board_size.get()
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
