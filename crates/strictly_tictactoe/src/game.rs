//! Free-function interface over [`Board`].
//!
//! Each function mirrors a `Board` method, for callers that prefer
//! `apply_move(&board, action)` over `board.apply_move(action)`.

use crate::{Board, IllegalMoveError, InvalidStateError, Move, Outcome, Player};

/// Returns the empty starting board.
pub fn initial_board() -> Board {
    Board::new()
}

/// Returns the player whose turn it is.
pub fn next_player(board: &Board) -> Player {
    board.next_player()
}

/// Returns every empty square, in row-major order.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    board.legal_moves()
}

/// Returns the board that results from playing `action`.
///
/// # Errors
///
/// See [`Board::apply_move`].
pub fn apply_move(board: &Board, action: Move) -> Result<Board, IllegalMoveError> {
    board.apply_move(action)
}

/// Returns the winner, if any.
pub fn winner(board: &Board) -> Option<Player> {
    board.winner()
}

/// Returns true once the game has ended.
pub fn is_terminal(board: &Board) -> bool {
    board.is_terminal()
}

/// Returns the utility of a finished game.
///
/// # Errors
///
/// See [`Board::utility`].
pub fn utility(board: &Board) -> Result<Outcome, InvalidStateError> {
    board.utility()
}
