//! Minimax search with alpha-beta pruning.
//!
//! X maximizes utility and O minimizes it. The two node kinds are written
//! as a pair of mutually recursive methods so each cut condition reads
//! exactly as stated: a max node stops once a child reaches `beta`, a min
//! node once a child falls to `alpha`.

use crate::constants::{WINDOW_CEILING, WINDOW_FLOOR};
use crate::{Board, Move, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// A move together with its exact game value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// The move.
    pub action: Move,
    /// Game value of the board after the move, under optimal play.
    pub score: Outcome,
}

impl std::fmt::Display for ScoredMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} => {:+}", self.action, self.score.value())
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    nodes: u64,
    cutoffs: u64,
}

impl SearchStats {
    /// Boards visited below the root.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Times a node returned before trying all of its moves.
    pub fn cutoffs(&self) -> u64 {
        self.cutoffs
    }
}

/// Alpha-beta minimax searcher.
///
/// Holds nothing but the counters of the most recent search, so a single
/// value can be reused across turns.
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    stats: SearchStats,
}

impl Minimax {
    /// Creates a new searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters from the most recent search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Returns the optimal move for the player to move, or `None` if the game is over.
    pub fn best_move(&mut self, board: &Board) -> Option<Move> {
        self.best_scored_move(board).map(|best| best.action)
    }

    /// Returns the optimal move and its value, or `None` if the game is over.
    ///
    /// Moves are tried in row-major order. A move replaces the running best
    /// only when it is strictly better, so ties go to the earliest move. A
    /// move reaching the mover's best possible outcome ends the search at
    /// once.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn best_scored_move(&mut self, board: &Board) -> Option<ScoredMove> {
        self.stats = SearchStats::default();

        if board.is_terminal() {
            debug!("Board is terminal, no move to make");
            return None;
        }

        let mover = board.next_player();
        let target = mover.best_outcome();
        let mut alpha = WINDOW_FLOOR;
        let mut beta = WINDOW_CEILING;
        let mut best: Option<ScoredMove> = None;

        for (action, child) in board.successors() {
            let score = match mover {
                Player::X => self.value_for_minimizer(&child, alpha, beta),
                Player::O => self.value_for_maximizer(&child, alpha, beta),
            };
            trace!(%action, score = score.value(), "Scored root move");

            if best.is_none_or(|b| mover.prefers(score, b.score)) {
                best = Some(ScoredMove { action, score });
                if score == target {
                    debug!(%action, "Found a forced win, skipping remaining moves");
                    break;
                }
                match mover {
                    Player::X => alpha = alpha.max(score),
                    Player::O => beta = beta.min(score),
                }
            }
        }

        debug!(
            best = ?best,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "Search complete"
        );
        best
    }

    /// Exact game value of `board` under optimal play by both sides.
    pub fn value(&mut self, board: &Board) -> Outcome {
        self.stats = SearchStats::default();
        match board.next_player() {
            Player::X => self.value_for_maximizer(board, WINDOW_FLOOR, WINDOW_CEILING),
            Player::O => self.value_for_minimizer(board, WINDOW_FLOOR, WINDOW_CEILING),
        }
    }

    /// Value of a board with X to move.
    ///
    /// Exact when it lands strictly inside `(alpha, beta)`; otherwise only a
    /// bound on the side of the window it fell out of.
    fn value_for_maximizer(&mut self, board: &Board, mut alpha: Outcome, beta: Outcome) -> Outcome {
        self.stats.nodes += 1;
        if let Some(terminal) = board.terminal() {
            return terminal.utility();
        }

        let mut value = Outcome::OWins;
        for (_, child) in board.successors() {
            let score = self.value_for_minimizer(&child, alpha, beta);
            // The minimizing parent already has something at least this good.
            if score >= beta {
                self.stats.cutoffs += 1;
                return score;
            }
            alpha = alpha.max(score);
            value = value.max(score);
        }
        value
    }

    /// Value of a board with O to move. Mirror image of `value_for_maximizer`.
    fn value_for_minimizer(&mut self, board: &Board, alpha: Outcome, mut beta: Outcome) -> Outcome {
        self.stats.nodes += 1;
        if let Some(terminal) = board.terminal() {
            return terminal.utility();
        }

        let mut value = Outcome::XWins;
        for (_, child) in board.successors() {
            let score = self.value_for_maximizer(&child, alpha, beta);
            if score <= alpha {
                self.stats.cutoffs += 1;
                return score;
            }
            beta = beta.min(score);
            value = value.min(score);
        }
        value
    }
}

/// Returns the optimal move for the player to move, or `None` if the game is over.
pub fn best_move(board: &Board) -> Option<Move> {
    Minimax::new().best_move(board)
}

/// Exact value of every legal move, in row-major order.
///
/// Unlike [`Minimax::best_scored_move`] nothing is skipped, so the list
/// shows every alternative and not just the chosen one.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluate_moves(board: &Board) -> Vec<ScoredMove> {
    if board.is_terminal() {
        return Vec::new();
    }
    let mut searcher = Minimax::new();
    board
        .successors()
        .map(|(action, child)| ScoredMove {
            action,
            score: searcher.value(&child),
        })
        .collect()
}
