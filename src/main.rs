//! Strictly Moves - Unified CLI
//!
//! Terminal client that sends square selections to a move authority.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Command, ConnectionArgs};
use strictly_moves::{
    BoardSurface, ClientConfig, GameEndHandler, HttpMoveAuthority, MoveRequester, Region,
    Resolution, SelectionController, SquareId,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { connection } => {
            let config = load_config(&connection)?;
            init_file_logging(&config)?;
            tui::run_tui(config).await
        }
        Command::Move {
            from,
            to,
            connection,
        } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
                )
                .with_writer(std::io::stderr)
                .init();
            let config = load_config(&connection)?;
            run_single_move(config, from.into(), to.into()).await
        }
    }
}

/// Loads the config file (if any) and applies command-line overrides.
fn load_config(connection: &ConnectionArgs) -> Result<ClientConfig> {
    let mut config = ClientConfig::load(connection.config.as_deref())?;
    if let Some(url) = &connection.server_url {
        config = config.with_server_url(url.clone());
    }
    Ok(config)
}

/// Logs to a file so output never interferes with the TUI.
fn init_file_logging(config: &ClientConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Sends one move through the regular controller path and prints the verdict.
#[instrument(skip(config), fields(server_url = %config.server_url()))]
async fn run_single_move(config: ClientConfig, from: SquareId, to: SquareId) -> Result<()> {
    let authority = HttpMoveAuthority::from_config(&config)?;
    let surface = BoardSurface::from_layout(vec![vec![from.clone(), to.clone()]]);
    let mut controller = SelectionController::new(MoveRequester::new(authority), surface);

    controller.click(from.clone()).await;
    let Some(resolution) = controller.click(to.clone()).await else {
        bail!("Move {} → {} was not dispatched", from, to);
    };
    info!(?resolution, "Move resolved");

    let surface = controller.surface();
    match resolution {
        Resolution::Rejected { message } => println!("Rejected: {}", message),
        Resolution::Updated { next_player } => {
            for id in [&from, &to] {
                if let Some(square) = surface.square(id) {
                    println!("{}: {}", id, square.glyph());
                }
            }
            if let Some(player) = next_player {
                println!("Next player: {}", player);
            }
        }
        Resolution::GameOver { winner } => println!("{}", GameEndHandler::announcement(&winner)),
        Resolution::TransportFailed { .. } => bail!("{}", surface.text(Region::Error)),
    }
    Ok(())
}
