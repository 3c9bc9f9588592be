//! Moves and the ways a move can be rejected.

use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: the sub-board to play in and the cell inside it.
///
/// The mark is implied by whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Target sub-board.
    pub board: Position,
    /// Target cell within the sub-board.
    pub cell: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(board: Position, cell: Position) -> Self {
        Self { board, cell }
    }

    /// Builds a move from raw indices, rejecting anything outside 0-8.
    ///
    /// The board index is checked before the cell index.
    #[instrument]
    pub fn from_indices(board_index: usize, cell_index: usize) -> Result<Self, MoveError> {
        let board = Position::from_index(board_index).ok_or(MoveError::OutOfRange {
            axis: Axis::Board,
        })?;
        let cell = Position::from_index(cell_index).ok_or(MoveError::OutOfRange {
            axis: Axis::Cell,
        })?;
        Ok(Self { board, cell })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.board, self.cell)
    }
}

/// Which index of a move was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Axis {
    /// The sub-board index.
    #[display("Board")]
    Board,
    /// The cell index.
    #[display("Cell")]
    Cell,
}

/// Why a move was rejected.
///
/// Every variant is a rejected input: the state the move was offered to is
/// left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A winner or draw is already recorded.
    #[display("Game is already over.")]
    GameOver,

    /// Board or cell index outside 0-8.
    #[display("{axis} index must be in range [0, 8].")]
    OutOfRange {
        /// The offending index.
        axis: Axis,
    },

    /// The target cell already holds a mark.
    #[display("Cell already occupied.")]
    CellOccupied {
        /// Sub-board of the occupied cell.
        board: Position,
        /// The occupied cell.
        cell: Position,
    },

    /// The target sub-board already has a mini-winner.
    #[display("This mini-board has already been won.")]
    BoardAlreadyWon {
        /// The decided sub-board.
        board: Position,
    },

    /// The move ignores the forced sub-board.
    #[display("You must play in board {}.", required.index())]
    WrongBoard {
        /// The sub-board the move had to target.
        required: Position,
    },
}

impl std::error::Error for MoveError {}

/// Fieldless tag for [`MoveError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum MoveErrorKind {
    /// See [`MoveError::GameOver`].
    GameOver,
    /// See [`MoveError::OutOfRange`].
    OutOfRange,
    /// See [`MoveError::CellOccupied`].
    CellOccupied,
    /// See [`MoveError::BoardAlreadyWon`].
    BoardAlreadyWon,
    /// See [`MoveError::WrongBoard`].
    WrongBoard,
}

impl MoveError {
    /// The kind of rule that was violated.
    pub fn kind(&self) -> MoveErrorKind {
        match self {
            MoveError::GameOver => MoveErrorKind::GameOver,
            MoveError::OutOfRange { .. } => MoveErrorKind::OutOfRange,
            MoveError::CellOccupied { .. } => MoveErrorKind::CellOccupied,
            MoveError::BoardAlreadyWon { .. } => MoveErrorKind::BoardAlreadyWon,
            MoveError::WrongBoard { .. } => MoveErrorKind::WrongBoard,
        }
    }
}
