//! Fixed game parameters.

use crate::types::Outcome;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: usize = 3;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Utility of a board X has won.
pub const X_WIN_VALUE: i8 = 1;

/// Utility of a board O has won.
pub const O_WIN_VALUE: i8 = -1;

/// Utility of a drawn board.
pub const DRAW_VALUE: i8 = 0;

/// Lower edge of the root search window.
///
/// Utilities never leave `[O_WIN_VALUE, X_WIN_VALUE]`, so the window can
/// start at the outcome range instead of at infinity.
pub const WINDOW_FLOOR: Outcome = Outcome::OWins;

/// Upper edge of the root search window.
pub const WINDOW_CEILING: Outcome = Outcome::XWins;

/// Square indices of every three-in-a-row line.
///
/// Rows first, then columns, then the two diagonals. Winner detection
/// reports the first complete line in this order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];
