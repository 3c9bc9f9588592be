//! First-class invariants for Ultimate Tic-Tac-Toe.
//!
//! Invariants are logical properties that must hold throughout a game.
//! State invariants look at a single [`GameState`](crate::GameState);
//! transition invariants compare a state with its successor. Both are
//! checked in debug builds and can be tested independently.

mod active_board;
mod mini_winners;
mod outcome;
mod transition;

pub use active_board::ActiveBoardPlayable;
pub use mini_winners::MiniWinnersMatchLines;
pub use outcome::{DrawWhenAllClosed, GlobalWinnerMatchesMiniWinners, SingleOutcome};
pub use transition::{MonotonicCells, StableMiniWinners, TerminalIsFinal};

use crate::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// A logical property relating a state to its successor.
pub trait TransitionInvariant<S> {
    /// Checks if the invariant holds across `before -> after`.
    fn holds(before: &S, after: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of state invariants checked together.
///
/// Implemented for tuples of up to five [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// A set of transition invariants checked together.
pub trait TransitionInvariantSet<S> {
    /// Checks all invariants across `before -> after`, collecting every violation.
    fn check_step(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_sets {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() { Ok(()) } else { Err(violations) }
            }
        }

        impl<S, $($inv),+> TransitionInvariantSet<S> for ($($inv,)+)
        where
            $($inv: TransitionInvariant<S>,)+
        {
            fn check_step(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(before, after) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() { Ok(()) } else { Err(violations) }
            }
        }
    };
}

impl_invariant_sets!(I1, I2);
impl_invariant_sets!(I1, I2, I3);
impl_invariant_sets!(I1, I2, I3, I4);
impl_invariant_sets!(I1, I2, I3, I4, I5);

/// Every invariant a single [`GameState`] must satisfy.
pub type StateInvariants = (
    SingleOutcome,
    DrawWhenAllClosed,
    GlobalWinnerMatchesMiniWinners,
    MiniWinnersMatchLines,
    ActiveBoardPlayable,
);

/// Every invariant a move must preserve between two [`GameState`]s.
pub type TransitionInvariants = (MonotonicCells, StableMiniWinners, TerminalIsFinal);

/// Checks the successor state and the step that produced it.
pub fn check_transition(
    before: &GameState,
    after: &GameState,
) -> Result<(), Vec<InvariantViolation>> {
    let mut violations = Vec::new();
    if let Err(v) = StateInvariants::check_all(after) {
        violations.extend(v);
    }
    if let Err(v) = TransitionInvariants::check_step(before, after) {
        violations.extend(v);
    }
    if violations.is_empty() { Ok(()) } else { Err(violations) }
}
