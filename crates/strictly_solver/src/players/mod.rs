//! Player trait and implementations.

mod engine;
mod human;

pub use engine::EnginePlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use strictly_tictactoe::{Board, Move};

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player for the given board.
    fn get_move(&mut self, board: &Board) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
