//! Line and fullness rules shared by both board levels.
//!
//! These are pure functions over any nine-slot grid, so the same code
//! scores a sub-board and the global board built from mini-winners.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};
