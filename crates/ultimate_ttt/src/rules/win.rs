//! Win detection over a nine-slot grid.

use crate::position::Position;
use crate::types::{Mark, Square};

/// The eight winning triples: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on a nine-slot grid.
///
/// Returns `Some(mark)` for the first line holding three equal marks,
/// `None` otherwise.
pub fn check_winner(squares: &[Square; 9]) -> Option<Mark> {
    LINES.iter().find_map(|[a, b, c]| {
        let sq = squares[a.index()];
        if sq == squares[b.index()] && sq == squares[c.index()] {
            sq.mark()
        } else {
            None
        }
    })
}
