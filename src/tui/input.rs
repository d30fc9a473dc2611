//! Key mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tictactoe_board::{BoardSize, Coord};

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Activate a specific cell.
    Activate(Coord),
    /// Activate the cell under the cursor.
    ActivateCursor,
    /// Move the cursor.
    Move(Direction),
    /// Start a new game.
    Restart,
    /// Leave the UI.
    Quit,
}

/// Maps a key event to an action, ignoring releases and unbound keys.
///
/// Digits `1`-`9` pick cells in reading order on boards with at most nine
/// cells.
pub fn map_key(key: &KeyEvent, size: BoardSize) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ActivateCursor),
        KeyCode::Up => Some(Action::Move(Direction::Up)),
        KeyCode::Down => Some(Action::Move(Direction::Down)),
        KeyCode::Left => Some(Action::Move(Direction::Left)),
        KeyCode::Right => Some(Action::Move(Direction::Right)),
        KeyCode::Char(c) => digit_cell(c, size).map(Action::Activate),
        _ => None,
    }
}

fn digit_cell(c: char, size: BoardSize) -> Option<Coord> {
    let digit = c.to_digit(10)? as usize;
    if digit == 0 || size.cell_count() > 9 || digit > size.cell_count() {
        return None;
    }
    let index = digit - 1;
    Some(Coord::new(index / size.get(), index % size.get()))
}

/// Moves the cursor one cell, staying put at the edges.
pub fn move_cursor(cursor: Coord, direction: Direction, size: BoardSize) -> Coord {
    let last = size.get() - 1;
    match direction {
        Direction::Up => Coord::new(cursor.row.saturating_sub(1), cursor.col),
        Direction::Down => Coord::new((cursor.row + 1).min(last), cursor.col),
        Direction::Left => Coord::new(cursor.row, cursor.col.saturating_sub(1)),
        Direction::Right => Coord::new(cursor.row, (cursor.col + 1).min(last)),
    }
}
