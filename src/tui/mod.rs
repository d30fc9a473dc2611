//! Terminal UI host.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, Direction, map_key, move_cursor};

use crate::config::GameConfig;
use crate::dispatch::{SessionDispatcher, join_worker};
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs an interactive game until the user quits.
#[instrument(skip_all, fields(board_size = %config.board_size(), starting_player = %config.starting_player()))]
pub async fn run_tui(config: &GameConfig) -> Result<()> {
    info!("Starting tictactoe TUI");

    let mut terminal = setup_terminal()?;

    let (handle, worker) = SessionDispatcher::new(config.new_session());
    let worker_task = tokio::spawn(worker.run());
    let mut app = App::new(handle, *config.board_size());

    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    drop(app);
    join_worker(worker_task).await;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Enters raw mode and the alternate screen, leaving raw mode again if the
/// rest of the setup fails.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    undo_on_err(enter_alternate_screen(), disable_raw_mode)
}

fn enter_alternate_screen() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Runs `undo` when `result` is an error, then passes `result` through.
fn undo_on_err<T>(
    result: io::Result<T>,
    undo: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    if let Err(err) = &result {
        warn!(error = %err, "Terminal setup failed, restoring");
        if let Err(undo_err) = undo() {
            error!(error = %undo_err, "Failed to restore terminal");
        }
    }
    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        let snapshot = app.handle().snapshot().await?;
        terminal.draw(|frame| ui::draw(frame, &snapshot, app.cursor(), app.notice()))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            let Some(action) = map_key(&key, snapshot.grid().size()) else {
                continue;
            };
            if !app.handle_action(action).await? {
                return Ok(());
            }
        }
    }
}
