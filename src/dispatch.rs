//! Serialized access to a game session.
//!
//! A [`SessionWorker`] owns the [`Session`] and applies commands one at a
//! time, in the order they arrive on its channel. Any number of cloned
//! [`SessionHandle`]s may send commands concurrently; each command runs to
//! completion before the next is received, so two activations of the same
//! cell can never both succeed.

use derive_more::{Display, Error};
use tictactoe_board::{Coord, PlaceError, Placement, Session, Snapshot};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, trace};

const COMMAND_BUFFER: usize = 64;

/// The worker behind a handle has stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum DispatchError {
    /// The worker dropped its receiver or a reply.
    #[display("Session worker is no longer running")]
    Disconnected,
}

/// A request to the session worker.
#[derive(Debug)]
pub enum SessionCommand {
    /// Activate a cell for the active player.
    PlaceMark {
        /// Cell to claim.
        coord: Coord,
        /// Receives the placement result.
        respond_to: oneshot::Sender<Result<Placement, PlaceError>>,
    },
    /// Start a new game.
    Restart {
        /// Signalled once the session is reset.
        respond_to: oneshot::Sender<()>,
    },
    /// Read the current state.
    Snapshot {
        /// Receives the snapshot.
        respond_to: oneshot::Sender<Snapshot>,
    },
}

/// Builds connected handle/worker pairs.
pub struct SessionDispatcher;

impl SessionDispatcher {
    /// Wraps `session` in a worker and returns a handle to it.
    ///
    /// The worker does nothing until [`SessionWorker::run`] is awaited or
    /// spawned.
    pub fn new(session: Session) -> (SessionHandle, SessionWorker) {
        let (sender, receiver) = mpsc::channel(COMMAND_BUFFER);
        (
            SessionHandle { sender },
            SessionWorker { receiver, session },
        )
    }
}

/// Cloneable sender side of a session worker.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    sender: mpsc::Sender<SessionCommand>,
}

impl SessionHandle {
    /// Places the active player's mark, reporting why it was ignored if so.
    pub async fn try_place(
        &self,
        coord: Coord,
    ) -> Result<Result<Placement, PlaceError>, DispatchError> {
        self.request(|respond_to| SessionCommand::PlaceMark { coord, respond_to })
            .await
    }

    /// Places the active player's mark. Returns whether it was applied.
    pub async fn place_mark(&self, coord: Coord) -> Result<bool, DispatchError> {
        Ok(self.try_place(coord).await?.is_ok())
    }

    /// Starts a new game with the session's starting player.
    pub async fn restart(&self) -> Result<(), DispatchError> {
        self.request(|respond_to| SessionCommand::Restart { respond_to })
            .await
    }

    /// Reads the current state.
    pub async fn snapshot(&self) -> Result<Snapshot, DispatchError> {
        self.request(|respond_to| SessionCommand::Snapshot { respond_to })
            .await
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> SessionCommand,
    ) -> Result<T, DispatchError> {
        let (respond_to, receiver) = oneshot::channel();
        self.sender
            .send(command(respond_to))
            .await
            .map_err(|_| DispatchError::Disconnected)?;
        receiver.await.map_err(|_| DispatchError::Disconnected)
    }
}

/// Receiving side: owns the session and applies commands in order.
#[derive(Debug)]
pub struct SessionWorker {
    receiver: mpsc::Receiver<SessionCommand>,
    session: Session,
}

impl SessionWorker {
    /// Processes commands until every handle is dropped, then returns the
    /// session.
    #[instrument(skip(self), fields(size = %self.session.size()))]
    pub async fn run(mut self) -> Session {
        info!("Session worker started");
        while let Some(command) = self.receiver.recv().await {
            self.apply(command);
        }
        info!("All handles dropped, session worker stopping");
        self.session
    }

    fn apply(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::PlaceMark { coord, respond_to } => {
                let result = self.session.try_place(coord);
                debug!(%coord, ?result, "Placement processed");
                if respond_to.send(result).is_err() {
                    trace!("PlaceMark response dropped (receiver gone)");
                }
            }
            SessionCommand::Restart { respond_to } => {
                self.session.restart();
                if respond_to.send(()).is_err() {
                    trace!("Restart response dropped (receiver gone)");
                }
            }
            SessionCommand::Snapshot { respond_to } => {
                if respond_to.send(self.session.snapshot()).is_err() {
                    trace!("Snapshot response dropped (receiver gone)");
                }
            }
        }
    }
}

/// Waits for a spawned worker to stop, logging a panic or cancellation.
///
/// Returns the final session, or `None` if the task did not finish normally.
pub async fn join_worker(task: JoinHandle<Session>) -> Option<Session> {
    match task.await {
        Ok(session) => Some(session),
        Err(err) => {
            error!(error = %err, panicked = err.is_panic(), "Session worker failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_board::{Outcome, Player};

    #[tokio::test]
    async fn test_commands_apply_in_order() {
        let (handle, worker) = SessionDispatcher::new(Session::standard(Player::X));
        let worker_task = tokio::spawn(worker.run());

        assert!(handle.place_mark(Coord::new(0, 0)).await.unwrap());
        assert!(!handle.place_mark(Coord::new(0, 0)).await.unwrap());
        let snapshot = handle.snapshot().await.unwrap();
        assert_eq!(*snapshot.active_player(), Player::O);

        drop(handle);
        let session = worker_task.await.unwrap();
        assert_eq!(session.active_player(), Player::O);
    }

    #[tokio::test]
    async fn test_try_place_reports_outcome() {
        let (handle, worker) = SessionDispatcher::new(Session::standard(Player::X));
        tokio::spawn(worker.run());

        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            handle.place_mark(Coord::new(row, col)).await.unwrap();
        }
        let result = handle.try_place(Coord::new(0, 2)).await.unwrap();
        assert_eq!(result, Ok(Placement::Ended(Outcome::Winner(Player::X))));
        assert_eq!(
            handle.try_place(Coord::new(2, 2)).await.unwrap(),
            Err(PlaceError::GameOver)
        );

        handle.restart().await.unwrap();
        assert!(!handle.snapshot().await.unwrap().is_ended());
    }

    #[tokio::test]
    async fn test_join_worker_returns_session() {
        let (handle, worker) = SessionDispatcher::new(Session::standard(Player::O));
        let task = tokio::spawn(worker.run());
        assert!(handle.place_mark(Coord::new(2, 2)).await.unwrap());
        drop(handle);

        let session = join_worker(task).await.unwrap();
        assert_eq!(session.active_player(), Player::X);
    }

    #[tokio::test]
    async fn test_join_worker_reports_panic() {
        let task: JoinHandle<Session> = tokio::spawn(async { panic!("worker crashed") });
        assert_eq!(join_worker(task).await, None);
    }

    #[tokio::test]
    async fn test_join_worker_reports_abort() {
        let (_handle, worker) = SessionDispatcher::new(Session::default());
        let task = tokio::spawn(worker.run());
        task.abort();
        assert_eq!(join_worker(task).await, None);
    }

    #[tokio::test]
    async fn test_disconnect_returns_error() {
        let (handle, worker) = SessionDispatcher::new(Session::default());
        drop(worker);
        assert_eq!(
            handle.place_mark(Coord::new(0, 0)).await,
            Err(DispatchError::Disconnected)
        );
        assert_eq!(handle.restart().await, Err(DispatchError::Disconnected));
    }
}
