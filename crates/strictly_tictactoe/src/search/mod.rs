//! Exact game-tree search.
//!
//! [`Minimax`] is the alpha-beta engine used for play. [`exhaustive_value`]
//! walks the whole tree without pruning and serves as the reference the
//! pruned search is checked against. [`self_play`] drives the engine against
//! itself until the game ends.

mod alpha_beta;
mod exhaustive;
mod playout;

pub use alpha_beta::{Minimax, ScoredMove, SearchStats, best_move, evaluate_moves};
pub use exhaustive::exhaustive_value;
pub use playout::{Playout, self_play};
