//! First-class invariants for tic-tac-toe boards.
//!
//! Invariants are logical properties that every board reachable through
//! legal play satisfies. Boards built from outside input are checked
//! against them; boards produced by moves are checked in debug builds.

use crate::rules::has_line;
use crate::{Board, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all hold, or every violation otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X has as many marks as O, or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);
        x_count == o_count || x_count == o_count + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

/// Invariant: at most one player owns a complete line.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        !(has_line(board, Player::X) && has_line(board, Player::O))
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (MarkBalanceInvariant, SingleWinnerInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Square};

    #[test]
    fn test_invariant_set_holds_for_empty_board() {
        assert!(BoardInvariants::check_all(&Board::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let board = Board::new()
            .apply_move(Move::new(0, 0))
            .and_then(|b| b.apply_move(Move::new(1, 1)))
            .and_then(|b| b.apply_move(Move::new(0, 2)))
            .expect("legal moves");
        assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_mark_balance_detects_extra_o() {
        let x = Square::Occupied(Player::X);
        let o = Square::Occupied(Player::O);
        let e = Square::Empty;
        let board = Board::from_rows_unchecked([[o, o, e], [x, e, e], [e, e, e]]);
        assert!(!MarkBalanceInvariant::holds(&board));

        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, MarkBalanceInvariant::description());
    }

    #[test]
    fn test_single_winner_detects_double_line() {
        let x = Square::Occupied(Player::X);
        let o = Square::Occupied(Player::O);
        let e = Square::Empty;
        let board = Board::from_rows_unchecked([[x, x, x], [o, o, o], [e, e, e]]);
        assert!(MarkBalanceInvariant::holds(&board));
        assert!(!SingleWinnerInvariant::holds(&board));
    }
}
