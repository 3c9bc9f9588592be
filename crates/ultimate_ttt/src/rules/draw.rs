//! Fullness detection over a nine-slot grid.

use crate::types::Square;

/// Checks if every slot is occupied.
///
/// A full sub-board with no winner is drawn and can no longer be targeted.
pub fn is_full(squares: &[Square; 9]) -> bool {
    squares.iter().all(|s| !s.is_empty())
}
