//! Win detection logic for tic-tac-toe.

use crate::constants::WINNING_LINES;
use crate::{Board, Player, Square};

/// Checks if there is a winner on the board.
///
/// Lines are scanned rows first, then columns, then diagonals; the mark on
/// the first complete line is returned. Boards reachable through legal play
/// never hold complete lines for both players.
pub fn check_winner(board: &Board) -> Option<Player> {
    let squares = board.squares();

    for [a, b, c] in WINNING_LINES {
        let sq = squares[a];
        if sq != Square::Empty && sq == squares[b] && sq == squares[c] {
            return sq.player();
        }
    }

    None
}

/// Returns true if `player` owns at least one complete line.
pub fn has_line(board: &Board, player: Player) -> bool {
    let target = Square::Occupied(player);
    let squares = board.squares();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| squares[idx] == target))
}
