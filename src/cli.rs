//! Command-line interface for strictly_moves.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Moves - play a server-judged board game from the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_moves")]
#[command(about = "Move-selection client for server-authoritative board games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Game server URL, overrides the config file
    #[arg(long)]
    pub server_url: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the terminal UI client
    Play {
        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// Send a single move and print the server's verdict
    Move {
        /// Square to move from
        from: String,

        /// Square to move to
        to: String,

        #[command(flatten)]
        connection: ConnectionArgs,
    },
}
