//! Draw detection logic for tic-tac-toe.

use crate::{Board, Square};

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board: Board = ".../.X./...".parse().expect("valid board");
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX/OXX/OXO".parse().expect("valid board");
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // X completes the top row on the last square
        let board: Board = "XXX/OOX/XOO".parse().expect("valid board");
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
