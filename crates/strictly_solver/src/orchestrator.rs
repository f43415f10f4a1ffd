//! Game orchestration between players.

use crate::players::Player;
use anyhow::{Context, Result};
use strictly_tictactoe::{Board, Mark, Move, Outcome};
use tracing::{debug, info};

/// Events emitted while a game is played.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A move was made.
    MoveMade {
        /// Name of the player who moved.
        player: String,
        /// Mark that was placed.
        mark: Mark,
        /// Square it was placed on.
        action: Move,
        /// Board after the move.
        board: Board,
    },
    /// The game ended.
    GameOver {
        /// Name of the winner, `None` for a draw.
        winner: Option<String>,
        /// Final result.
        outcome: Outcome,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    board: Board,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl Orchestrator {
    /// Creates a new orchestrator starting from `board`.
    pub fn new(board: Board, player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self {
            board,
            player_x,
            player_o,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs the game loop until the game ends, reporting each step to `on_event`.
    pub fn run(&mut self, mut on_event: impl FnMut(&GameEvent) -> Result<()>) -> Result<Outcome> {
        info!(board = %self.board, "Starting game orchestration");

        loop {
            if let Some(terminal) = self.board.terminal() {
                let winner = terminal.winner().map(|mark| self.player(mark).name().to_string());
                let outcome = terminal.utility();
                info!(%outcome, "Game over");
                on_event(&GameEvent::GameOver { winner, outcome })?;
                return Ok(outcome);
            }

            let board = self.board;
            let mark = board.next_player();
            let player = self.player_mut(mark);
            let name = player.name().to_string();

            debug!(player = %name, %mark, "Waiting for move");
            let action = player.get_move(&board)?;

            self.board = board
                .apply_move(action)
                .with_context(|| format!("{} played an illegal move", name))?;

            on_event(&GameEvent::MoveMade {
                player: name,
                mark,
                action,
                board: self.board,
            })?;
        }
    }

    fn player(&self, mark: Mark) -> &dyn Player {
        match mark {
            Mark::X => self.player_x.as_ref(),
            Mark::O => self.player_o.as_ref(),
        }
    }

    fn player_mut(&mut self, mark: Mark) -> &mut dyn Player {
        match mark {
            Mark::X => self.player_x.as_mut(),
            Mark::O => self.player_o.as_mut(),
        }
    }
}
