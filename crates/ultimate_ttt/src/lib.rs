//! Ultimate Tic-Tac-Toe rules engine.
//!
//! Nine tic-tac-toe sub-boards form one global board. The cell a player
//! picks decides which sub-board the opponent must play in next. Winning a
//! sub-board claims the matching cell of the global board.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Square`], [`SubBoard`], [`Position`]
//! - **Rules**: line and fullness checks shared by both board levels
//! - **Game**: the immutable [`GameState`] and its move state machine
//! - **History**: an append-only log of states for callers that keep one
//! - **Invariants**: properties every state and every move must preserve
//!
//! The engine is pure and synchronous. Serializing access to a single
//! game's history is the caller's job.
//!
//! # Example
//!
//! ```
//! use ultimate_ttt::{GameState, Mark};
//!
//! let game = GameState::new(Mark::X);
//! let game = game.apply_move(0, 4).unwrap();
//! assert_eq!(game.status().to_string(), "O's turn");
//!
//! // O is now forced into sub-board 4.
//! assert_eq!(
//!     game.apply_move(0, 0).unwrap_err().to_string(),
//!     "You must play in board 4."
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Axis, Move, MoveError, MoveErrorKind};
pub use game::{GameState, GameStatus, new_game, status};
pub use history::History;
pub use position::{Position, PositionOutOfRange};
pub use types::{Mark, Square, SubBoard};
