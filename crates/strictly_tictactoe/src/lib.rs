//! Strictly Tic-Tac-Toe - pure game logic and an exact solver
//!
//! # Architecture
//!
//! - **Board model**: an immutable [`Board`] value with pure transitions
//!   (`next_player`, `legal_moves`, `apply_move`, `winner`, `is_terminal`,
//!   `utility`). Turn order is derived from the mark counts.
//! - **Search**: [`Minimax`], an alpha-beta searcher that returns a provably
//!   optimal move, plus an unpruned reference evaluator and self-play.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{best_move, Board, Move, Player};
//!
//! let board: Board = "XX./OO./...".parse()?;
//! assert_eq!(board.next_player(), Player::X);
//!
//! let action = best_move(&board).expect("game not over");
//! assert_eq!(action, Move::new(0, 2));
//!
//! let board = board.apply_move(action)?;
//! assert_eq!(board.winner(), Some(Player::X));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod game;
mod search;
mod types;

pub mod constants;
pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use action::{IllegalMoveError, Move};
pub use board::{Board, BoardError, InvalidStateError, TerminalBoard};
pub use types::{GameStatus, Outcome, Player, Square};

// Crate-level exports - Free-function interface
pub use game::{apply_move, initial_board, is_terminal, legal_moves, next_player, utility, winner};

// Crate-level exports - Search
pub use search::{
    Minimax, Playout, ScoredMove, SearchStats, best_move, evaluate_moves, exhaustive_value,
    self_play,
};

/// Alias for clarity where a player is referred to by the mark it places.
pub type Mark = Player;
