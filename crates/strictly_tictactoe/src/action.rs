//! First-class action types for tic-tac-toe.
//!
//! A move only names a square. Which mark lands there is decided by the
//! board it is applied to, so moves carry no player.

use crate::constants::{BOARD_SIZE, SQUARE_COUNT};
use serde::{Deserialize, Serialize};

/// A move: the `(row, col)` coordinate of the square to occupy.
///
/// Coordinates are zero-based. A `Move` may name a square outside the
/// board; [`Board::apply_move`](crate::Board::apply_move) rejects it.
/// The derived ordering is row-major, which is also the order legal
/// moves are enumerated in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct Move {
    /// Row, 0 at the top.
    pub row: usize,
    /// Column, 0 at the left.
    pub col: usize,
}

impl Move {
    /// Returns true if both coordinates fall on the board.
    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Row-major square index (0-8), or `None` when off the board.
    pub fn index(self) -> Option<usize> {
        self.in_bounds().then(|| self.row * BOARD_SIZE + self.col)
    }

    /// Creates a move from a row-major square index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SQUARE_COUNT).then(|| Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    /// Creates a move from a keypad-style cell number (1-9).
    pub fn from_cell_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(Self::from_index)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error returned when a move cannot be applied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMoveError {
    /// The coordinate is outside the 3x3 grid.
    #[display("Move {} is off the board", _0)]
    OutOfBounds(Move),

    /// The square at the coordinate is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Move),
}

impl std::error::Error for IllegalMoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_corners() {
        assert_eq!(Move::new(0, 0).index(), Some(0));
        assert_eq!(Move::new(1, 1).index(), Some(4));
        assert_eq!(Move::new(2, 2).index(), Some(8));
        assert_eq!(Move::from_index(5), Some(Move::new(1, 2)));
        assert_eq!(Move::from_index(9), None);
    }

    #[test]
    fn test_out_of_bounds_has_no_index() {
        assert!(!Move::new(3, 0).in_bounds());
        assert_eq!(Move::new(0, 3).index(), None);
    }

    #[test]
    fn test_cell_numbers_are_one_based() {
        assert_eq!(Move::from_cell_number(1), Some(Move::new(0, 0)));
        assert_eq!(Move::from_cell_number(9), Some(Move::new(2, 2)));
        assert_eq!(Move::from_cell_number(0), None);
        assert_eq!(Move::from_cell_number(10), None);
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut moves = vec![Move::new(1, 0), Move::new(0, 2), Move::new(0, 1)];
        moves.sort();
        assert_eq!(moves, vec![Move::new(0, 1), Move::new(0, 2), Move::new(1, 0)]);
    }

    #[test]
    fn test_error_messages() {
        let err = IllegalMoveError::Occupied(Move::new(0, 0));
        assert_eq!(err.to_string(), "Square (0, 0) is already occupied");
        let err = IllegalMoveError::OutOfBounds(Move::new(3, 1));
        assert_eq!(err.to_string(), "Move (3, 1) is off the board");
    }
}
