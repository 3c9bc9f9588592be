//! Command-line interface for ultimate_ttt.

use clap::{Parser, Subcommand};
use derive_more::Display;
use std::path::PathBuf;
use tracing::{debug, instrument};
use ultimate_ttt::{History, Mark, Move, MoveError};

/// Ultimate Tic-Tac-Toe - rules engine and REST server
#[derive(Parser, Debug)]
#[command(name = "ultimate_ttt")]
#[command(about = "Ultimate Tic-Tac-Toe engine with a REST interface", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Replay a move list and print the final board
    Replay {
        /// Mark that moves first
        #[arg(long, default_value = "X")]
        starting: Mark,

        /// Moves as `board,cell` pairs, e.g. `4,4 4,0`
        moves: Vec<String>,
    },
}

/// Why a replay stopped.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ReplayError {
    /// A move argument was not a `board,cell` pair.
    #[display("Move {index} ({text:?}) is not a board,cell pair")]
    Parse {
        /// Position of the argument in the move list.
        index: usize,
        /// The argument as given.
        text: String,
    },
    /// The engine rejected a move.
    #[display("Move {index} rejected: {error}")]
    Rejected {
        /// Position of the move in the move list.
        index: usize,
        /// The engine's reason.
        error: MoveError,
    },
}

impl std::error::Error for ReplayError {}

/// Parses one `board,cell` argument into raw indices.
pub fn parse_pair(text: &str) -> Option<(usize, usize)> {
    let (board, cell) = text.split_once(',')?;
    Some((board.trim().parse().ok()?, cell.trim().parse().ok()?))
}

/// Plays `moves` from a fresh game.
///
/// Stops at the first malformed or illegal move.
#[instrument]
pub fn replay(starting: Mark, moves: &[String]) -> Result<History, ReplayError> {
    let mut history = History::new(ultimate_ttt::GameState::new(starting));
    for (index, text) in moves.iter().enumerate() {
        let (board, cell) = parse_pair(text).ok_or_else(|| ReplayError::Parse {
            index,
            text: text.clone(),
        })?;
        let mov = Move::from_indices(board, cell)
            .map_err(|error| ReplayError::Rejected { index, error })?;
        history
            .play(mov)
            .map_err(|error| ReplayError::Rejected { index, error })?;
        debug!(index, %mov, "Replayed move");
    }
    Ok(history)
}
