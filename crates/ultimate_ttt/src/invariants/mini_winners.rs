//! Mini-winner consistency invariant.

use super::Invariant;
use crate::GameState;
use crate::position::Position;

/// Invariant: a sub-board's recorded winner is exactly the mark completing
/// one of its lines, and is empty when no line is complete.
pub struct MiniWinnersMatchLines;

impl Invariant<GameState> for MiniWinnersMatchLines {
    fn holds(state: &GameState) -> bool {
        Position::ALL
            .into_iter()
            .all(|board| state.mini_winner(board) == state.board(board).winner())
    }

    fn description() -> &'static str {
        "Each mini-winner matches the completed line of its sub-board"
    }
}
