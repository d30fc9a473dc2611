//! Tests for loading game configuration from disk.

use std::io::Write;
use tictactoe::{GameConfig, MAX_BOARD_SIZE};
use tictactoe_board::Player;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
board_size = 4
starting_player = "O"
log_file = "game.log"
"#,
    );

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.board_size().get(), 4);
    assert_eq!(*config.starting_player(), Player::O);
    assert_eq!(config.log_file().to_str(), Some("game.log"));

    let session = config.new_session();
    assert_eq!(session.active_player(), Player::O);
    assert_eq!(session.grid().cells().len(), 16);
}

#[test]
fn test_load_without_path_uses_defaults() {
    assert_eq!(GameConfig::load(None).unwrap(), GameConfig::default());
}

#[test]
fn test_missing_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_oversized_board_rejected() {
    let file = write_config(&format!("board_size = {}", MAX_BOARD_SIZE + 1));
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("board_size must be at most 9"));
}

#[test]
fn test_zero_board_rejected() {
    let file = write_config("board_size = 0");
    assert!(GameConfig::from_file(file.path()).is_err());
}

#[test]
fn test_unknown_key_rejected() {
    let file = write_config("board_size = 3\ncolour = \"blue\"");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
