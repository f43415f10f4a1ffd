//! Engine self-play.

use super::Minimax;
use crate::{Board, IllegalMoveError, Move, Outcome};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// A game played to the end by the engine on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Playout {
    /// Board the playout started from.
    start: Board,
    /// Moves played, in order.
    moves: Vec<Move>,
    /// Terminal board.
    finish: Board,
    /// Result of the game.
    outcome: Outcome,
}

/// Plays optimal moves for both sides from `start` until the game ends.
///
/// # Errors
///
/// Propagates `IllegalMoveError` from [`Board::apply_move`]. The engine only
/// proposes empty squares, so this does not happen in practice.
#[instrument(skip(start), fields(start = %start))]
pub fn self_play(start: Board) -> Result<Playout, IllegalMoveError> {
    let mut searcher = Minimax::new();
    let mut board = start;
    let mut moves = Vec::new();

    while let Some(action) = searcher.best_move(&board) {
        board = board.apply_move(action)?;
        moves.push(action);
    }

    let outcome = Outcome::from_winner(board.winner());
    info!(moves = moves.len(), %outcome, "Self-play finished");
    Ok(Playout {
        start,
        moves,
        finish: board,
        outcome,
    })
}
