//! Tests for the board model's public operations.

use strictly_tictactoe::{
    Board, GameStatus, IllegalMoveError, InvalidStateError, Move, Outcome, Player, Square,
    apply_move, initial_board, is_terminal, legal_moves, next_player, utility, winner,
};

fn board(text: &str) -> Board {
    text.parse().expect("valid board")
}

/// Every board reachable from the empty board through legal moves.
fn reachable_boards() -> Vec<Board> {
    let mut seen = std::collections::HashSet::new();
    let mut stack = vec![initial_board()];
    while let Some(b) = stack.pop() {
        if !seen.insert(b) {
            continue;
        }
        if is_terminal(&b) {
            continue;
        }
        for action in legal_moves(&b) {
            stack.push(apply_move(&b, action).expect("legal move"));
        }
    }
    seen.into_iter().collect()
}

#[test]
fn test_initial_board_is_empty() {
    let b = initial_board();
    assert!(b.squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(next_player(&b), Player::X);
    assert_eq!(legal_moves(&b).len(), 9);
    assert!(!is_terminal(&b));
}

#[test]
fn test_reachable_board_count() {
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_next_player_alternates_on_every_reachable_board() {
    for b in reachable_boards() {
        if is_terminal(&b) {
            continue;
        }
        for action in legal_moves(&b) {
            let after = apply_move(&b, action).expect("legal move");
            assert_ne!(next_player(&after), next_player(&b), "{b} then {action}");
        }
    }
}

#[test]
fn test_apply_move_does_not_mutate_input() {
    let before = board("X../.O./...");
    let snapshot = before;
    let after = apply_move(&before, Move::new(2, 2)).expect("legal move");
    assert_eq!(before, snapshot);
    assert_eq!(before.get(Move::new(2, 2)), Some(Square::Empty));
    assert_eq!(after.get(Move::new(2, 2)), Some(Square::Occupied(Player::X)));
}

#[test]
fn test_second_move_to_same_square_is_rejected() {
    let b = apply_move(&initial_board(), Move::new(0, 0)).expect("first move is legal");
    let result = apply_move(&b, Move::new(0, 0));
    assert_eq!(result, Err(IllegalMoveError::Occupied(Move::new(0, 0))));
    assert!(result.unwrap_err().to_string().contains("occupied"));
}

#[test]
fn test_out_of_range_move_is_rejected() {
    let result = apply_move(&initial_board(), Move::new(3, 1));
    assert_eq!(result, Err(IllegalMoveError::OutOfBounds(Move::new(3, 1))));
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    let b = board("XOX/XOO/OXX");
    assert!(is_terminal(&b));
    assert!(legal_moves(&b).is_empty());
    assert_eq!(winner(&b), None);
    assert_eq!(utility(&b), Ok(Outcome::Draw));
    assert_eq!(b.status(), GameStatus::Draw);
}

#[test]
fn test_winning_move_scenario() {
    let b = board("XX./OO./...");
    assert_eq!(next_player(&b), Player::X);
    let after = apply_move(&b, Move::new(0, 2)).expect("legal move");
    assert_eq!(winner(&after), Some(Player::X));
    assert_eq!(utility(&after), Ok(Outcome::XWins));
    assert_eq!(after.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_o_win_has_negative_utility() {
    let b = board("XX./OOO/X..");
    let terminal = b.terminal().expect("O has a line");
    assert_eq!(terminal.utility(), Outcome::OWins);
    assert_eq!(terminal.utility().value(), -1);
    assert_eq!(terminal.winner(), Some(Player::O));
}

#[test]
fn test_utility_rejects_game_in_progress() {
    let b = board("X../.../...");
    assert_eq!(utility(&b), Err(InvalidStateError { board: b }));
}

#[test]
fn test_winner_is_unique_on_reachable_boards() {
    use strictly_tictactoe::invariants::{BoardInvariants, InvariantSet};
    for b in reachable_boards() {
        assert!(BoardInvariants::check_all(&b).is_ok(), "{b}");
    }
}

#[test]
fn test_board_serializes_to_json() {
    let b = board("XO./.X./...");
    let json = serde_json::to_string(&b).expect("serializable");
    let back: Board = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, b);
}

#[test]
fn test_deserialize_rejects_unbalanced_board() {
    let json = serde_json::to_string(&board("X../.../...")).expect("serializable");
    let tampered = json.replace(r#"{"Occupied":"X"}"#, r#"{"Occupied":"O"}"#);
    assert_ne!(tampered, json);

    let err = serde_json::from_str::<Board>(&tampered).unwrap_err();
    assert!(err.to_string().contains("X count equals O count"));
}

#[test]
fn test_deserialize_rejects_double_winner() {
    let x = r#"{"Occupied":"X"}"#;
    let o = r#"{"Occupied":"O"}"#;
    let json = format!(
        r#"{{"squares":[{x},{x},{x},{o},{o},{o},"Empty","Empty","Empty"]}}"#
    );
    assert!(serde_json::from_str::<Board>(&json).is_err());
}
