//! Game state and the move state machine.
//!
//! A [`GameState`] is an immutable value. Applying a move never touches the
//! state it was called on; it returns a new state that shares every
//! untouched sub-board with its predecessor.

use crate::action::{Move, MoveError};
use crate::invariants::{InvariantSet, StateInvariants};
use crate::position::Position;
use crate::rules::check_winner;
use crate::types::{Mark, Square, SubBoard};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing; the mark is whose turn it is.
    #[display("{_0}'s turn")]
    InProgress(Mark),
    /// Game ended in a win.
    #[display("{_0} wins")]
    Won(Mark),
    /// Game ended in a draw.
    #[display("draw")]
    Draw,
}

/// Complete state of an Ultimate Tic-Tac-Toe game.
///
/// Deserializing checks every state invariant, so a decoded state is one
/// the move state machine can safely continue from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// The nine sub-boards, row-major.
    pub(crate) boards: [Arc<SubBoard>; 9],
    /// Recorded winner of each sub-board.
    pub(crate) mini_winners: [Square; 9],
    /// Sub-board the next move must target; `None` means any open board.
    pub(crate) active_board: Option<Position>,
    /// Whose turn it is (or would be, once the game is over).
    pub(crate) current_player: Mark,
    /// Overall winner.
    pub(crate) winner: Option<Mark>,
    /// No legal moves remain and nobody won.
    pub(crate) is_draw: bool,
}

/// Creates a new game, starting with `starting` or [`Mark::X`].
#[instrument]
pub fn new_game(starting: Option<Mark>) -> GameState {
    GameState::new(starting.unwrap_or_default())
}

/// Human-readable summary: `"X wins"`, `"draw"` or `"O's turn"`.
pub fn status(state: &GameState) -> String {
    state.status().to_string()
}

impl GameState {
    /// Creates an empty game with `starting` to move and no forced board.
    #[instrument]
    pub fn new(starting: Mark) -> Self {
        let empty = Arc::new(SubBoard::new());
        Self {
            boards: std::array::from_fn(|_| Arc::clone(&empty)),
            mini_winners: [Square::Empty; 9],
            active_board: None,
            current_player: starting,
            winner: None,
            is_draw: false,
        }
    }

    /// Returns the sub-board at `board`.
    pub fn board(&self, board: Position) -> &SubBoard {
        &self.boards[board.index()]
    }

    /// Returns all nine sub-boards.
    pub fn boards(&self) -> &[Arc<SubBoard>; 9] {
        &self.boards
    }

    /// Returns the mini-winner slots, usable as a nine-slot global board.
    pub fn mini_winners(&self) -> &[Square; 9] {
        &self.mini_winners
    }

    /// Returns the recorded winner of one sub-board.
    pub fn mini_winner(&self, board: Position) -> Option<Mark> {
        self.mini_winners[board.index()].mark()
    }

    /// Returns the forced sub-board, if any.
    pub fn active_board(&self) -> Option<Position> {
        self.active_board
    }

    /// Returns the mark to move.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the overall winner.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// True once the game ended without a winner.
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// True once a winner or a draw is recorded.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        match (self.winner, self.is_draw) {
            (Some(mark), _) => GameStatus::Won(mark),
            (None, true) => GameStatus::Draw,
            (None, false) => GameStatus::InProgress(self.current_player),
        }
    }

    /// A sub-board is closed once it has a mini-winner or no empty cell.
    pub fn is_board_closed(&self, board: Position) -> bool {
        closed(&self.boards, &self.mini_winners, board)
    }

    /// Applies a move given as raw indices.
    ///
    /// Checks run in order: game over, index range, then the rules of
    /// [`GameState::play`].
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] that applies; `self` is unchanged.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&self, board_index: usize, cell_index: usize) -> Result<Self, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let mov = Move::from_indices(board_index, cell_index)?;
        self.play(mov)
    }

    /// Applies a move, returning the successor state.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] that applies; `self` is unchanged.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&self, mov: Move) -> Result<Self, MoveError> {
        self.validate(mov)?;

        let next = self.successor(mov);
        debug_assert!(
            StateInvariants::check_all(&next).is_ok(),
            "successor state violates invariants: {:?}",
            StateInvariants::check_all(&next)
        );

        match next.status() {
            GameStatus::Won(mark) => info!(winner = %mark, "Game won"),
            GameStatus::Draw => info!("Game drawn"),
            GameStatus::InProgress(_) => {
                debug!(active_board = ?next.active_board, "Move applied");
            }
        }
        Ok(next)
    }

    /// Checks a move against every rule without applying it.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] that applies.
    pub fn validate(&self, mov: Move) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board(mov.board).is_empty_at(mov.cell) {
            return Err(MoveError::CellOccupied {
                board: mov.board,
                cell: mov.cell,
            });
        }
        if self.mini_winner(mov.board).is_some() {
            return Err(MoveError::BoardAlreadyWon { board: mov.board });
        }
        // A forced board only binds while it can still be played.
        if let Some(required) = self.active_board
            && required != mov.board
            && !self.is_board_closed(required)
        {
            return Err(MoveError::WrongBoard { required });
        }
        Ok(())
    }

    /// Every move [`GameState::play`] would accept, in board then cell order.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        let boards = match self.active_board {
            Some(required) if !self.is_board_closed(required) => vec![required],
            _ => Position::ALL.to_vec(),
        };
        boards
            .into_iter()
            .filter(|&board| self.mini_winner(board).is_none())
            .flat_map(|board| {
                Position::ALL
                    .into_iter()
                    .filter(move |&cell| self.board(board).is_empty_at(cell))
                    .map(move |cell| Move::new(board, cell))
            })
            .collect()
    }

    /// Builds the successor of a validated move.
    fn successor(&self, mov: Move) -> Self {
        let player = self.current_player;
        let updated = self.board(mov.board).with_mark(mov.cell, player);

        let mut mini_winners = self.mini_winners;
        if mini_winners[mov.board.index()].is_empty()
            && let Some(mark) = updated.winner()
        {
            debug!(board = %mov.board, winner = %mark, "Sub-board won");
            mini_winners[mov.board.index()] = Square::Occupied(mark);
        }

        let mut boards = self.boards.clone();
        boards[mov.board.index()] = Arc::new(updated);

        let winner = check_winner(&mini_winners);
        let is_draw = winner.is_none()
            && Position::ALL
                .into_iter()
                .all(|board| closed(&boards, &mini_winners, board));

        let active_board = if closed(&boards, &mini_winners, mov.cell) {
            None
        } else {
            Some(mov.cell)
        };

        Self {
            boards,
            mini_winners,
            active_board,
            current_player: player.opponent(),
            winner,
            is_draw,
        }
    }

    /// Renders the full 9x9 grid as text, `.` for empty cells.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for big_row in 0..3 {
            if big_row > 0 {
                out.push_str("------+-------+------\n");
            }
            for small_row in 0..3 {
                let row: Vec<String> = (0..3)
                    .map(|big_col| {
                        let board = &self.boards[big_row * 3 + big_col];
                        (0..3)
                            .map(|small_col| match board.squares()[small_row * 3 + small_col] {
                                Square::Empty => ".".to_string(),
                                Square::Occupied(mark) => mark.to_string(),
                            })
                            .collect::<Vec<_>>()
                            .join(" ")
                    })
                    .collect();
                out.push_str(&row.join(" | "));
                out.push('\n');
            }
        }
        out
    }
}

/// Unchecked wire form of a [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    boards: [Arc<SubBoard>; 9],
    mini_winners: [Square; 9],
    active_board: Option<Position>,
    current_player: Mark,
    winner: Option<Mark>,
    is_draw: bool,
}

impl<'de> Deserialize<'de> for GameState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawGameState::deserialize(deserializer)?;
        let state = Self {
            boards: raw.boards,
            mini_winners: raw.mini_winners,
            active_board: raw.active_board,
            current_player: raw.current_player,
            winner: raw.winner,
            is_draw: raw.is_draw,
        };
        StateInvariants::check_all(&state).map_err(|violations| {
            let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
            D::Error::custom(format!("inconsistent game state: {}", reasons.join("; ")))
        })?;
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Mark::default())
    }
}

fn closed(boards: &[Arc<SubBoard>; 9], mini_winners: &[Square; 9], board: Position) -> bool {
    !mini_winners[board.index()].is_empty() || boards[board.index()].is_full()
}
