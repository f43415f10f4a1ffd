//! Position analysis report.

use serde::Serialize;
use strictly_tictactoe::{
    Board, GameStatus, Mark, Minimax, ScoredMove, SearchStats, evaluate_moves,
};
use tracing::instrument;

/// Everything the solver knows about one position.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// The analyzed board.
    pub board: Board,
    /// Side to move, `None` once the game is over.
    pub to_move: Option<Mark>,
    /// Game status.
    pub status: GameStatus,
    /// Exact value of every legal move, in row-major order.
    pub moves: Vec<ScoredMove>,
    /// Move the engine would play.
    pub best: Option<ScoredMove>,
    /// Counters from the best-move search.
    pub stats: SearchStats,
}

impl AnalysisReport {
    /// Analyzes `board`.
    #[instrument(skip(board), fields(board = %board))]
    pub fn new(board: Board) -> Self {
        let status = board.status();
        let mut searcher = Minimax::new();
        let best = searcher.best_scored_move(&board);

        Self {
            board,
            to_move: (!status.is_over()).then(|| board.next_player()),
            status,
            moves: evaluate_moves(&board),
            best,
            stats: searcher.stats(),
        }
    }
}

impl std::fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board.display_numbered())?;
        writeln!(f)?;
        writeln!(f, "Status: {}", self.status)?;
        if let Some(mark) = self.to_move {
            writeln!(f, "To move: {}", mark)?;
        }
        for scored in &self.moves {
            writeln!(f, "  {}", scored)?;
        }
        match &self.best {
            Some(best) => writeln!(f, "Best: {}", best)?,
            None => writeln!(f, "Best: none")?,
        }
        write!(
            f,
            "Searched {} nodes, {} cutoffs",
            self.stats.nodes(),
            self.stats.cutoffs()
        )
    }
}
