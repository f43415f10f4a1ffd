//! Plain minimax over the whole game tree, no pruning.

use crate::{Board, Outcome, Player};

/// Exact game value of `board`, found by visiting every reachable board.
///
/// Far slower than [`Minimax`](super::Minimax) and kept as the reference
/// the pruned search must agree with.
pub fn exhaustive_value(board: &Board) -> Outcome {
    if let Some(terminal) = board.terminal() {
        return terminal.utility();
    }

    let values = board.successors().map(|(_, child)| exhaustive_value(&child));
    match board.next_player() {
        Player::X => values.fold(Outcome::OWins, Outcome::max),
        Player::O => values.fold(Outcome::XWins, Outcome::min),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_value_is_utility() {
        let board: Board = "OOO/XX./XX.".parse().expect("valid board");
        assert_eq!(exhaustive_value(&board), Outcome::OWins);
    }

    #[test]
    fn test_forced_win_for_o() {
        let board: Board = "XX./OO./X..".parse().expect("valid board");
        assert_eq!(exhaustive_value(&board), Outcome::OWins);
    }

    #[test]
    fn test_late_position_draw() {
        let board: Board = "XOX/XO./OX.".parse().expect("valid board");
        assert_eq!(exhaustive_value(&board), Outcome::Draw);
    }
}
