//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// noughts - tic-tac-toe against a human or the computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe with a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Seed for the random source (reproducible easy/normal play)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the computer's move for one board as JSON
    Move {
        /// Board as a JSON 3x3 grid or 9-character string (e.g. "X...O....")
        #[arg(short, long)]
        board: String,

        /// easy, normal, hard or impossible
        #[arg(short, long)]
        difficulty: Option<String>,

        /// Mark the computer plays (X or O)
        #[arg(short, long)]
        mark: Option<String>,

        /// Seed for the random source
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print whether a board is won, drawn or still in progress as JSON
    Status {
        /// Board as a JSON 3x3 grid or 9-character string
        #[arg(short, long)]
        board: String,
    },
}
