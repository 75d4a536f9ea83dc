//! Terminal UI for Strictly Moves

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use strictly_moves::{
    BoardSurface, ClientConfig, HttpMoveAuthority, MoveAuthority, MoveRequester,
    PresentationSurface, Region,
};
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

use app::{App, MoveOutcome};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run the TUI client
pub async fn run_tui(config: ClientConfig) -> Result<()> {
    info!(server_url = %config.server_url(), "Starting Strictly Moves TUI");

    let authority = HttpMoveAuthority::from_config(&config)?;
    let requester = MoveRequester::new(authority);

    // Build the surface before touching the terminal so failures print normally
    let state = requester
        .authority()
        .board()
        .await
        .context("Failed to fetch the initial board")?;
    let mut surface = BoardSurface::from_board(&state.board);
    if let Some(player) = &state.next_player {
        surface.set_text(Region::CurrentPlayer, player);
    }

    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();
    let mut app = App::new(requester, surface, outcome_tx);
    if let Some(winner) = &state.winner {
        info!(%winner, "Game already over");
        app.end_game(winner);
    }

    let mut terminal = setup_terminal()?;

    let res = run_app(&mut terminal, &mut app, &mut outcome_rx).await;

    restore_terminal(&mut terminal)?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    res
}

/// Enters raw mode and the alternate screen, undoing both if setup fails.
fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let setup = || -> Result<Tui> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Terminal::new(CrosstermBackend::new(stdout))?)
    };
    setup().inspect_err(|err| {
        error!(error = ?err, "Terminal setup failed");
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        let _ = disable_raw_mode();
    })
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Event loop: draw, apply finished requests, read keys.
#[instrument(skip_all)]
async fn run_app<A: MoveAuthority + 'static>(
    terminal: &mut Tui,
    app: &mut App<A>,
    outcome_rx: &mut mpsc::UnboundedReceiver<MoveOutcome>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app.surface(), app.cursor(), app.status_message()))?;

        while let Ok(outcome) = outcome_rx.try_recv() {
            app.handle_outcome(outcome);
        }

        // Keep polling short so request answers show up promptly
        if !event::poll(Duration::from_millis(50))? {
            tokio::task::yield_now().await;
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    info!("User quit");
                    return Ok(());
                }
                KeyCode::Char('r') => app.retry(),
                KeyCode::Enter | KeyCode::Char(' ') => app.activate(),
                code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                    app.move_cursor(code)
                }
                _ => {}
            }
        }
    }
}
