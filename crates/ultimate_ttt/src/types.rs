//! Core domain types for Ultimate Tic-Tac-Toe.

use crate::position::Position;
use crate::rules::{check_winner, is_full};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// A player's token.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player X (the default starting mark).
    #[default]
    X,
    /// Player O.
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Parses a starting mark, falling back to [`Mark::X`] when the name is
    /// missing or not a mark.
    #[instrument]
    pub fn parse_or_default(name: Option<&str>) -> Self {
        match name.map(Mark::from_str) {
            Some(Ok(mark)) => mark,
            Some(Err(_)) => {
                debug!(?name, "Unrecognised starting mark, using default");
                Mark::default()
            }
            None => Mark::default(),
        }
    }
}

/// A single slot: a cell of a sub-board or a mini-winner entry.
///
/// Serialized as `null`, `"X"` or `"O"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<Mark>", into = "Option<Mark>")]
pub enum Square {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Holds a mark.
    Occupied(Mark),
}

impl Square {
    /// The mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    /// True when no mark is present.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

impl From<Option<Mark>> for Square {
    fn from(mark: Option<Mark>) -> Self {
        mark.map_or(Square::Empty, Square::Occupied)
    }
}

impl From<Square> for Option<Mark> {
    fn from(square: Square) -> Self {
        square.mark()
    }
}

/// One of the nine inner 3x3 boards.
///
/// Sub-boards are values: placing a mark yields a new board and leaves the
/// original untouched, so a board can be shared between game states.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubBoard {
    squares: [Square; 9],
}

impl SubBoard {
    /// Creates an empty sub-board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// True when every cell holds a mark.
    pub fn is_full(&self) -> bool {
        is_full(&self.squares)
    }

    /// The mark completing a row, column or diagonal, if any.
    pub fn winner(&self) -> Option<Mark> {
        check_winner(&self.squares)
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut squares = self.squares;
        squares[pos.index()] = Square::Occupied(mark);
        Self { squares }
    }
}

impl From<[Square; 9]> for SubBoard {
    fn from(squares: [Square; 9]) -> Self {
        Self { squares }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(Mark::parse_or_default(Some("O")), Mark::O);
        assert_eq!(Mark::parse_or_default(Some("X")), Mark::X);
        assert_eq!(Mark::parse_or_default(Some("Z")), Mark::X);
        assert_eq!(Mark::parse_or_default(None), Mark::X);
    }

    #[test]
    fn test_square_serializes_as_nullable_mark() {
        assert_eq!(serde_json::to_string(&Square::Empty).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Square::Occupied(Mark::O)).unwrap(), "\"O\"");
        let sq: Square = serde_json::from_str("\"X\"").unwrap();
        assert_eq!(sq, Square::Occupied(Mark::X));
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = SubBoard::new();
        let next = board.with_mark(Position::Center, Mark::X);
        assert!(board.is_empty_at(Position::Center));
        assert_eq!(next.get(Position::Center), Square::Occupied(Mark::X));
    }

    #[test]
    fn test_sub_board_winner_and_fullness() {
        let board = [Position::TopLeft, Position::Center, Position::BottomRight]
            .into_iter()
            .fold(SubBoard::new(), |b, pos| b.with_mark(pos, Mark::O));
        assert_eq!(board.winner(), Some(Mark::O));
        assert!(!board.is_full());
    }
}
