//! Invariants tying the recorded outcome to the boards.

use super::Invariant;
use crate::GameState;
use crate::position::Position;
use crate::rules::check_winner;

/// Invariant: a game is never both won and drawn.
pub struct SingleOutcome;

impl Invariant<GameState> for SingleOutcome {
    fn holds(state: &GameState) -> bool {
        !(state.winner().is_some() && state.is_draw())
    }

    fn description() -> &'static str {
        "A game is never both won and drawn"
    }
}

/// Invariant: the overall winner is the line winner of the mini-winner grid.
pub struct GlobalWinnerMatchesMiniWinners;

impl Invariant<GameState> for GlobalWinnerMatchesMiniWinners {
    fn holds(state: &GameState) -> bool {
        state.winner() == check_winner(state.mini_winners())
    }

    fn description() -> &'static str {
        "Overall winner matches the line winner of the mini-winners"
    }
}

/// Invariant: a draw is recorded exactly when nobody won and every
/// sub-board is closed.
pub struct DrawWhenAllClosed;

impl Invariant<GameState> for DrawWhenAllClosed {
    fn holds(state: &GameState) -> bool {
        let all_closed = Position::ALL
            .into_iter()
            .all(|board| state.is_board_closed(board));
        state.is_draw() == (state.winner().is_none() && all_closed)
    }

    fn description() -> &'static str {
        "Draw is recorded exactly when no winner exists and every sub-board is closed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_fresh_game_holds() {
        let state = GameState::default();
        assert!(SingleOutcome::holds(&state));
        assert!(GlobalWinnerMatchesMiniWinners::holds(&state));
        assert!(DrawWhenAllClosed::holds(&state));
    }

    #[test]
    fn test_premature_draw_violates() {
        let mut state = GameState::default();
        state.is_draw = true;
        assert!(!DrawWhenAllClosed::holds(&state));
    }

    #[test]
    fn test_winner_without_line_violates() {
        let mut state = GameState::default();
        state.winner = Some(Mark::X);
        assert!(!GlobalWinnerMatchesMiniWinners::holds(&state));
    }
}
