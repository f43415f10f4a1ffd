//! Engine player backed by the minimax solver.

use super::Player;
use anyhow::Result;
use strictly_tictactoe::{Board, Minimax, Move};
use tracing::debug;

/// Player that always picks the optimal move.
pub struct EnginePlayer {
    name: String,
    searcher: Minimax,
}

impl EnginePlayer {
    /// Creates a new engine player.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            searcher: Minimax::new(),
        }
    }
}

impl Player for EnginePlayer {
    fn get_move(&mut self, board: &Board) -> Result<Move> {
        let action = self
            .searcher
            .best_move(board)
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;

        let stats = self.searcher.stats();
        debug!(
            engine = %self.name,
            %action,
            nodes = stats.nodes(),
            cutoffs = stats.cutoffs(),
            "Engine chose move"
        );
        Ok(action)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
