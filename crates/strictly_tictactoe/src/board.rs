//! Immutable 3x3 board and its pure transition functions.

use crate::action::{IllegalMoveError, Move};
use crate::constants::{BOARD_SIZE, SQUARE_COUNT};
use crate::invariants::{BoardInvariants, InvariantSet, InvariantViolation};
use crate::rules;
use crate::types::{GameStatus, Outcome, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// A `Board` is a plain value: every transition returns a new board and the
/// receiver is left untouched. Whose turn it is follows from the mark
/// counts, so there is no separate turn state to keep in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; SQUARE_COUNT],
}

/// Wire form of a [`Board`], checked on the way in.
#[derive(Deserialize)]
struct RawBoard {
    squares: [Square; SQUARE_COUNT],
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board {
            squares: raw.squares,
        }
        .validated()
    }
}

impl Board {
    /// Creates a new empty board.
    pub const fn new() -> Self {
        Self {
            squares: [Square::Empty; SQUARE_COUNT],
        }
    }

    /// Builds a board from rows, checking it could arise from legal play.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::Inconsistent` if the mark counts are unbalanced
    /// or both players own a line.
    pub fn from_rows(rows: [[Square; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, BoardError> {
        Self::from_rows_unchecked(rows).validated()
    }

    pub(crate) fn from_rows_unchecked(rows: [[Square; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut squares = [Square::Empty; SQUARE_COUNT];
        for (idx, square) in rows.iter().flatten().enumerate() {
            squares[idx] = *square;
        }
        Self { squares }
    }

    fn validated(self) -> Result<Self, BoardError> {
        BoardInvariants::check_all(&self).map_err(BoardError::Inconsistent)?;
        Ok(self)
    }

    /// Gets the square at the given coordinate.
    pub fn get(&self, action: Move) -> Option<Square> {
        action.index().map(|idx| self.squares[idx])
    }

    /// Checks if the square at the given coordinate is empty.
    pub fn is_empty(&self, action: Move) -> bool {
        matches!(self.get(action), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; SQUARE_COUNT] {
        &self.squares
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Returns the player whose turn it is.
    ///
    /// X moves whenever the counts are equal, O otherwise.
    pub fn next_player(&self) -> Player {
        if self.count(Player::X) == self.count(Player::O) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns every empty square, in row-major order.
    ///
    /// An empty list means the board is full.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.empty_indices().filter_map(Move::from_index).collect()
    }

    /// Returns the board that results from playing `action`.
    ///
    /// The mark placed is `self.next_player()`'s. `self` is not modified.
    ///
    /// # Errors
    ///
    /// Returns `IllegalMoveError::OutOfBounds` for a coordinate off the grid
    /// and `IllegalMoveError::Occupied` for a taken square.
    #[instrument(level = "trace", skip(self), fields(board = %self))]
    pub fn apply_move(&self, action: Move) -> Result<Board, IllegalMoveError> {
        let idx = action
            .index()
            .ok_or(IllegalMoveError::OutOfBounds(action))?;
        if self.squares[idx] != Square::Empty {
            debug!(%action, "Rejected move onto occupied square");
            return Err(IllegalMoveError::Occupied(action));
        }

        let next = self.with_mark(idx, self.next_player());
        debug_assert!(
            BoardInvariants::check_all(&next).is_ok(),
            "move produced an inconsistent board"
        );
        Ok(next)
    }

    /// Every legal move paired with the board it produces, in row-major order.
    ///
    /// Skips the error path of [`apply_move`](Self::apply_move), since every
    /// index yielded here is known to be empty.
    pub(crate) fn successors(&self) -> impl Iterator<Item = (Move, Board)> + '_ {
        let mark = self.next_player();
        self.empty_indices().filter_map(move |idx| {
            Move::from_index(idx).map(|action| (action, self.with_mark(idx, mark)))
        })
    }

    fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(idx, _)| idx)
    }

    fn with_mark(&self, idx: usize, player: Player) -> Board {
        let mut squares = self.squares;
        squares[idx] = Square::Occupied(player);
        Board { squares }
    }

    /// Returns the winner, if any player has three in a row.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns true once the game has ended by a win or a full board.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Returns the game status of this board.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None if self.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Returns the board as a [`TerminalBoard`] if the game has ended.
    pub fn terminal(&self) -> Option<TerminalBoard> {
        match self.winner() {
            Some(player) => Some(TerminalBoard {
                outcome: Outcome::from_winner(Some(player)),
            }),
            None if self.is_full() => Some(TerminalBoard {
                outcome: Outcome::Draw,
            }),
            None => None,
        }
    }

    /// Returns the utility of a finished game.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateError` when the game is still in progress. That is
    /// a caller bug rather than a runtime condition; use
    /// [`terminal`](Self::terminal) to get an infallible `utility`.
    pub fn utility(&self) -> Result<Outcome, InvalidStateError> {
        self.terminal()
            .map(|t| t.utility())
            .ok_or(InvalidStateError { board: *self })
    }

    /// Formats the board as a numbered grid for terminal play.
    ///
    /// Empty squares show their cell number (1-9).
    pub fn display_numbered(&self) -> String {
        let mut result = String::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = row * BOARD_SIZE + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => char::from_digit((pos + 1) as u32, 10).unwrap_or('?'),
                    Square::Occupied(player) => player.symbol(),
                };
                result.push(symbol);
                if col < BOARD_SIZE - 1 {
                    result.push('|');
                }
            }
            if row < BOARD_SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact single-line form, rows separated by `/`: `XX./OO./...`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, square) in self.squares.iter().enumerate() {
            if idx > 0 && idx % BOARD_SIZE == 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", square.symbol())?;
        }
        Ok(())
    }
}

/// Parses nine square symbols (`X`, `O`, `.`, `_`, `-`).
///
/// Whitespace and the separators `/`, `|` and `+` are ignored, so both the
/// compact form and a pasted grid are accepted.
impl std::str::FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '/' | '|' | '+'))
            .collect();
        if symbols.len() != SQUARE_COUNT {
            return Err(BoardError::WrongLength {
                expected: SQUARE_COUNT,
                got: symbols.len(),
            });
        }

        let mut squares = [Square::Empty; SQUARE_COUNT];
        for (position, &character) in symbols.iter().enumerate() {
            squares[position] = Square::from_symbol(character)
                .ok_or(BoardError::InvalidSymbol { character, position })?;
        }

        Board { squares }.validated()
    }
}

/// A board on which the game has ended.
///
/// Only obtainable through [`Board::terminal`], so `utility` is total here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalBoard {
    outcome: Outcome,
}

impl TerminalBoard {
    /// Utility of the finished game: +1 X won, -1 O won, 0 draw.
    pub fn utility(&self) -> Outcome {
        self.outcome
    }

    /// Returns the winner, or `None` for a draw.
    pub fn winner(&self) -> Option<Player> {
        self.outcome.winner()
    }
}

/// Utility was requested for a board whose game is not over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Utility is undefined for non-terminal board {}", board)]
pub struct InvalidStateError {
    /// The offending board.
    pub board: Board,
}

impl std::error::Error for InvalidStateError {}

/// Error building a board from outside input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Wrong number of square symbols.
    #[display("Expected {} squares, got {}", expected, got)]
    WrongLength {
        /// Squares required.
        expected: usize,
        /// Squares found.
        got: usize,
    },

    /// A character that is not a square symbol.
    #[display("Invalid square symbol {:?} at position {}", character, position)]
    InvalidSymbol {
        /// The offending character.
        character: char,
        /// Square index it was read for.
        position: usize,
    },

    /// The squares could not arise from legal play.
    #[display("Inconsistent board: {}", join_violations(_0))]
    Inconsistent(Vec<InvariantViolation>),
}

impl std::error::Error for BoardError {}

fn join_violations(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
