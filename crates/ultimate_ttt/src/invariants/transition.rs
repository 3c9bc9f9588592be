//! Invariants over a single accepted move.

use super::TransitionInvariant;
use crate::GameState;
use crate::position::Position;

/// Invariant: cells are set at most once and never cleared, and exactly one
/// cell changes per move.
pub struct MonotonicCells;

impl TransitionInvariant<GameState> for MonotonicCells {
    fn holds(before: &GameState, after: &GameState) -> bool {
        let mut changed = 0;
        for board in Position::ALL {
            for cell in Position::ALL {
                let old = before.board(board).get(cell);
                let new = after.board(board).get(cell);
                if old != new {
                    if !old.is_empty() {
                        return false;
                    }
                    changed += 1;
                }
            }
        }
        changed == 1
    }

    fn description() -> &'static str {
        "Exactly one empty cell is filled per move and no cell is overwritten"
    }
}

/// Invariant: a mini-winner goes from empty to a mark at most once.
pub struct StableMiniWinners;

impl TransitionInvariant<GameState> for StableMiniWinners {
    fn holds(before: &GameState, after: &GameState) -> bool {
        Position::ALL.into_iter().all(|board| {
            match (before.mini_winner(board), after.mini_winner(board)) {
                (Some(old), new) => new == Some(old),
                (None, _) => true,
            }
        })
    }

    fn description() -> &'static str {
        "Mini-winners are never cleared or changed once recorded"
    }
}

/// Invariant: moves only follow in-progress states, so a recorded outcome
/// never changes.
pub struct TerminalIsFinal;

impl TransitionInvariant<GameState> for TerminalIsFinal {
    fn holds(before: &GameState, _after: &GameState) -> bool {
        !before.is_over()
    }

    fn description() -> &'static str {
        "No move follows a won or drawn game"
    }
}
