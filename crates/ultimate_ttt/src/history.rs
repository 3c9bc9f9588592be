//! Append-only game history.

use crate::action::{Move, MoveError};
use crate::game::GameState;
use crate::invariants::check_transition;
use crate::types::Mark;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{instrument, warn};

/// Ordered log of every state a game has passed through.
///
/// The first entry is the initial state; each later entry is the result of
/// the move at the same position in [`History::moves`] (offset by one).
/// Entries are never modified or removed. Deserializing replays every
/// recorded move and rejects a log that does not reproduce its own states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    states: Vec<GameState>,
    moves: Vec<Move>,
}

impl History {
    /// Starts a history at `initial`.
    pub fn new(initial: GameState) -> Self {
        Self {
            states: vec![initial],
            moves: Vec::new(),
        }
    }

    /// Returns the most recent state.
    pub fn latest(&self) -> &GameState {
        // `new` seeds one state and nothing removes entries.
        &self.states[self.states.len() - 1]
    }

    /// Returns every state, oldest first.
    pub fn states(&self) -> &[GameState] {
        &self.states
    }

    /// Returns every accepted move, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of recorded states (moves + 1).
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false: a history holds at least its initial state.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Applies a move given as raw indices to the latest state and appends
    /// the result.
    ///
    /// # Errors
    ///
    /// Returns the engine's [`MoveError`]; the log is left unchanged.
    #[instrument(skip(self), fields(len = self.states.len()))]
    pub fn apply_move(
        &mut self,
        board_index: usize,
        cell_index: usize,
    ) -> Result<&GameState, MoveError> {
        let latest = self.latest();
        if latest.is_over() {
            return Err(MoveError::GameOver);
        }
        let mov = Move::from_indices(board_index, cell_index)?;
        self.play(mov)
    }

    /// Applies a typed move to the latest state and appends the result.
    ///
    /// # Errors
    ///
    /// Returns the engine's [`MoveError`]; the log is left unchanged.
    #[instrument(skip(self), fields(len = self.states.len()))]
    pub fn play(&mut self, mov: Move) -> Result<&GameState, MoveError> {
        let next = self.latest().play(mov).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;
        debug_assert!(
            check_transition(self.latest(), &next).is_ok(),
            "history step violates invariants: {:?}",
            check_transition(self.latest(), &next)
        );
        self.moves.push(mov);
        self.states.push(next);
        Ok(self.latest())
    }

    /// Rebuilds a history by replaying `moves` from a new game.
    ///
    /// # Errors
    ///
    /// Returns the first rejected move's error.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(starting: Mark, moves: &[Move]) -> Result<Self, MoveError> {
        let mut history = Self::new(GameState::new(starting));
        for &mov in moves {
            history.play(mov)?;
        }
        Ok(history)
    }
}

#[derive(Deserialize)]
struct RawHistory {
    states: Vec<GameState>,
    moves: Vec<Move>,
}

impl<'de> Deserialize<'de> for History {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let RawHistory { states, moves } = RawHistory::deserialize(deserializer)?;
        if states.is_empty() {
            return Err(D::Error::custom("history has no initial state"));
        }
        if states.len() != moves.len() + 1 {
            return Err(D::Error::custom(format!(
                "history has {} states for {} moves",
                states.len(),
                moves.len()
            )));
        }
        for (index, (pair, &mov)) in states.windows(2).zip(&moves).enumerate() {
            match pair[0].play(mov) {
                Ok(next) if next == pair[1] => {}
                Ok(_) => {
                    return Err(D::Error::custom(format!(
                        "move {index} {mov} does not produce the recorded state"
                    )));
                }
                Err(e) => {
                    return Err(D::Error::custom(format!("move {index} {mov} is illegal: {e}")));
                }
            }
        }
        Ok(Self { states, moves })
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(GameState::default())
    }
}
