//! Application state and logic.

use super::input::{Action, move_cursor};
use crate::dispatch::{DispatchError, SessionHandle};
use tictactoe_board::{BoardSize, Coord, Placement};
use tracing::{debug, info};

/// Main application state.
pub struct App {
    handle: SessionHandle,
    size: BoardSize,
    cursor: Coord,
    notice: Option<String>,
}

impl App {
    /// Creates an app driving the session behind `handle`, cursor centred.
    pub fn new(handle: SessionHandle, size: BoardSize) -> Self {
        let middle = size.get() / 2;
        Self {
            handle,
            size,
            cursor: Coord::new(middle, middle),
            notice: None,
        }
    }

    /// Gets the session handle.
    pub fn handle(&self) -> &SessionHandle {
        &self.handle
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Gets the message about the last ignored activation, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Applies an action. Returns `false` when the user asked to quit.
    pub async fn handle_action(&mut self, action: Action) -> Result<bool, DispatchError> {
        debug!(?action, "Handling action");

        match action {
            Action::Quit => {
                info!("User quit");
                return Ok(false);
            }
            Action::Move(direction) => {
                self.cursor = move_cursor(self.cursor, direction, self.size);
            }
            Action::Activate(coord) => {
                self.cursor = coord;
                self.activate(coord).await?;
            }
            Action::ActivateCursor => {
                self.activate(self.cursor).await?;
            }
            Action::Restart => {
                self.handle.restart().await?;
                self.notice = None;
            }
        }
        Ok(true)
    }

    async fn activate(&mut self, coord: Coord) -> Result<(), DispatchError> {
        match self.handle.try_place(coord).await? {
            Ok(Placement::Continue { next }) => {
                debug!(%coord, %next, "Mark placed");
                self.notice = None;
            }
            Ok(Placement::Ended(outcome)) => {
                info!(%coord, ?outcome, "Game over");
                self.notice = None;
            }
            Err(reason) => {
                self.notice = Some(reason.to_string());
            }
        }
        Ok(())
    }
}
