//! REST server for the Ultimate Tic-Tac-Toe engine.
//!
//! Games live in an in-memory [`GameStore`]; [`router`] exposes them under
//! `/tictactoe`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod api;
pub mod cli;
pub mod config;
pub mod dto;
pub mod store;

pub use api::{ApiError, router};
pub use config::{ConfigError, ServerConfig};
pub use dto::{
    CreateGameRequest, DeleteResponse, ErrorBody, GameListResponse, GameStateDto, MoveRequest,
};
pub use store::{GameId, GameStore, StoreError};
