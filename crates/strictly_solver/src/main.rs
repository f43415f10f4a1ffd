//! Strictly Solver - Unified CLI
//!
//! Play against, watch, or query an exact tic-tac-toe solver.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod orchestrator;
mod players;
mod report;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::SolverConfig;
use orchestrator::{GameEvent, Orchestrator};
use players::{EnginePlayer, HumanPlayer, Player};
use report::AnalysisReport;
use strictly_tictactoe::{Board, Mark, best_move, evaluate_moves, self_play};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let (config, source) = SolverConfig::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
    info!(%source, human = %config.human(), "Configuration loaded");
    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Play {
            human,
            watch,
            board,
        } => {
            let config = match human {
                Some(mark) => config.with_human(mark),
                None => config,
            };
            run_play(&config, watch, board.unwrap_or_default())
        }
        Command::SelfPlay { board } => run_self_play(board.unwrap_or_default()),
        Command::Analyze { board, json } => run_analyze(board, json),
        Command::BestMove { board } => run_best_move(board),
    }
}

/// Play an interactive game (or watch the engine play itself)
#[instrument(skip(config, board), fields(board = %board))]
fn run_play(config: &SolverConfig, watch: bool, board: Board) -> Result<()> {
    let engine = |name: &str| -> Box<dyn Player> { Box::new(EnginePlayer::new(name)) };
    let human = || -> Box<dyn Player> {
        Box::new(HumanPlayer::new("You", std::io::stdin().lock(), std::io::stdout()))
    };

    let (player_x, player_o) = match (watch, *config.human()) {
        (true, _) => (engine("Engine X"), engine("Engine O")),
        (false, Mark::X) => (human(), engine("Engine")),
        (false, Mark::O) => (engine("Engine"), human()),
    };
    info!(x = player_x.name(), o = player_o.name(), "Starting game");

    let show_analysis = *config.show_analysis() && !watch;
    let human_mark = *config.human();
    let mut orchestrator = Orchestrator::new(board, player_x, player_o);

    println!("{}\n", orchestrator.board().display_numbered());
    if show_analysis && !board.is_terminal() && board.next_player() == human_mark {
        print_move_values(orchestrator.board());
    }

    orchestrator.run(|event| {
        match event {
            GameEvent::MoveMade {
                player,
                mark,
                action,
                board,
            } => {
                println!("{} ({}) plays {}\n", player, mark, action);
                println!("{}\n", board.display_numbered());
                if show_analysis && !board.is_terminal() && board.next_player() == human_mark {
                    print_move_values(board);
                }
            }
            GameEvent::GameOver { winner, outcome } => match winner {
                Some(name) => println!("{} wins! ({})", name, outcome),
                None => println!("Draw."),
            },
        }
        Ok(())
    })?;

    Ok(())
}

fn print_move_values(board: &Board) {
    for scored in evaluate_moves(board) {
        println!("  {}", scored);
    }
    println!();
}

/// Let the engine play both sides from `board`
#[instrument(skip(board), fields(board = %board))]
fn run_self_play(board: Board) -> Result<()> {
    let playout = self_play(board)?;

    let mut current = *playout.start();
    println!("{}\n", current.display_numbered());
    for action in playout.moves() {
        let mark = current.next_player();
        current = current.apply_move(*action)?;
        println!("{} plays {}\n", mark, action);
        println!("{}\n", current.display_numbered());
    }
    println!("Result: {}", playout.outcome());
    Ok(())
}

/// Print the value of every legal move
#[instrument(skip(board), fields(board = %board))]
fn run_analyze(board: Board, json: bool) -> Result<()> {
    let report = AnalysisReport::new(board);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

/// Print the optimal move, or "none" for a finished game
#[instrument(skip(board), fields(board = %board))]
fn run_best_move(board: Board) -> Result<()> {
    match best_move(&board) {
        Some(action) => println!("{} {}", action.row, action.col),
        None => println!("none"),
    }
    Ok(())
}
