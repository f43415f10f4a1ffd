//! Core domain types for tic-tac-toe.

use crate::constants::{DRAW_VALUE, O_WIN_VALUE, X_WIN_VALUE};
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    #[serde(alias = "x")]
    X,
    /// Player O (goes second, minimizes utility).
    #[serde(alias = "o")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Symbol used when rendering a board.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// The best outcome this player can hope for.
    pub fn best_outcome(self) -> Outcome {
        match self {
            Player::X => Outcome::XWins,
            Player::O => Outcome::OWins,
        }
    }

    /// Returns true if `candidate` is strictly better than `incumbent` for this player.
    pub fn prefers(self, candidate: Outcome, incumbent: Outcome) -> bool {
        match self {
            Player::X => candidate > incumbent,
            Player::O => candidate < incumbent,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Symbol used when rendering a board.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(player) => player.symbol(),
        }
    }

    /// Parses a rendered square symbol.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' | '_' | '-' => Some(Square::Empty),
            'X' | 'x' => Some(Square::Occupied(Player::X)),
            'O' | 'o' | '0' => Some(Square::Occupied(Player::O)),
            _ => None,
        }
    }

    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Game-theoretic value of a terminal board, from X's perspective.
///
/// Variants are declared in ascending order so the derived `Ord` matches
/// the numeric utility: `OWins < Draw < XWins`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(i8)]
pub enum Outcome {
    /// O has three in a row (utility -1).
    OWins = O_WIN_VALUE,
    /// Full board without a line (utility 0).
    Draw = DRAW_VALUE,
    /// X has three in a row (utility +1).
    XWins = X_WIN_VALUE,
}

impl Outcome {
    /// Numeric utility in `{-1, 0, 1}`.
    pub fn value(self) -> i8 {
        self as i8
    }

    /// Outcome of a finished game given its winner.
    pub fn from_winner(winner: Option<Player>) -> Self {
        match winner {
            Some(Player::X) => Outcome::XWins,
            Some(Player::O) => Outcome::OWins,
            None => Outcome::Draw,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::XWins => Some(Player::X),
            Outcome::OWins => Some(Player::O),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::XWins => write!(f, "X wins"),
            Outcome::OWins => write!(f, "O wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Current status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_outcome_order_matches_utility() {
        assert!(Outcome::OWins < Outcome::Draw);
        assert!(Outcome::Draw < Outcome::XWins);
        assert_eq!(Outcome::OWins.value(), -1);
        assert_eq!(Outcome::Draw.value(), 0);
        assert_eq!(Outcome::XWins.value(), 1);
    }

    #[test]
    fn test_prefers_is_strict() {
        assert!(Player::X.prefers(Outcome::Draw, Outcome::OWins));
        assert!(!Player::X.prefers(Outcome::Draw, Outcome::Draw));
        assert!(Player::O.prefers(Outcome::OWins, Outcome::Draw));
        assert!(!Player::O.prefers(Outcome::XWins, Outcome::Draw));
    }

    #[test]
    fn test_opponent_is_an_involution() {
        use strum::IntoEnumIterator;
        for player in Player::iter() {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_player_parses_case_insensitive() {
        assert_eq!(Player::from_str("x"), Ok(Player::X));
        assert_eq!(Player::from_str("O"), Ok(Player::O));
        assert!(Player::from_str("z").is_err());
    }

    #[test]
    fn test_square_symbols() {
        assert_eq!(Square::from_symbol('.'), Some(Square::Empty));
        assert_eq!(Square::from_symbol('x'), Some(Square::Occupied(Player::X)));
        assert_eq!(Square::Occupied(Player::O).symbol(), 'O');
        assert_eq!(Square::from_symbol('?'), None);
    }
}
