//! Forced-board invariant.

use super::Invariant;
use crate::GameState;

/// Invariant: a forced sub-board is always still playable.
///
/// When the cell just played points at a closed sub-board, the next move is
/// unconstrained instead.
pub struct ActiveBoardPlayable;

impl Invariant<GameState> for ActiveBoardPlayable {
    fn holds(state: &GameState) -> bool {
        state
            .active_board()
            .is_none_or(|board| !state.is_board_closed(board))
    }

    fn description() -> &'static str {
        "Forced sub-board is neither decided nor full"
    }
}
