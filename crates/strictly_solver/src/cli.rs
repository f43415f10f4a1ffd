//! Command-line interface for strictly_solver.

use clap::{Parser, Subcommand};
use strictly_tictactoe::{Board, Mark};

/// Strictly Solver - perfect-play tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "strictly_solver")]
#[command(about = "Exact minimax solver for tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the solver config file (defaults are used if it doesn't exist)
    #[arg(short, long, global = true, default_value = "strictly_solver.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
///
/// Boards are given as nine squares (`X`, `O`, `.`), optionally split into
/// rows with `/`, e.g. `XX./OO./...`.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game against the engine on the terminal
    Play {
        /// Mark you play (x or o); overrides the config file
        #[arg(long)]
        human: Option<Mark>,

        /// Let the engine play both sides
        #[arg(long, conflicts_with = "human")]
        watch: bool,

        /// Starting position (empty board if omitted)
        #[arg(long)]
        board: Option<Board>,
    },

    /// Let the engine play both sides to the end
    SelfPlay {
        /// Starting position (empty board if omitted)
        #[arg(long)]
        board: Option<Board>,
    },

    /// Show the exact value of every legal move
    Analyze {
        /// Position to analyze
        #[arg(long)]
        board: Board,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the optimal move for a position, or "none" if the game is over
    BestMove {
        /// Position to search
        #[arg(long)]
        board: Board,
    },
}
