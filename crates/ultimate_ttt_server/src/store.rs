//! In-memory game storage keyed by game ID.

use derive_more::Display;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use tracing::{debug, info, instrument, warn};
use ultimate_ttt::{GameState, History, Mark, MoveError};
use uuid::Uuid;

/// Unique identifier for a game.
pub type GameId = String;

/// Errors from the game store.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum StoreError {
    /// No game with this ID.
    #[display("Game not found.")]
    NotFound {
        /// The unknown ID.
        id: GameId,
    },
    /// The engine rejected the move.
    #[display("{_0}")]
    Move(MoveError),
    /// A thread panicked while holding a store lock.
    #[display("Game store lock poisoned")]
    LockPoisoned,
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Move(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveError> for StoreError {
    fn from(err: MoveError) -> Self {
        StoreError::Move(err)
    }
}

type GameSlot = Arc<Mutex<History>>;

/// Shared store of every live game.
///
/// The outer lock only guards the ID map. Each game has its own mutex, so
/// moves against one game are applied one at a time while other games
/// proceed in parallel.
#[derive(Debug, Clone, Default)]
pub struct GameStore {
    games: Arc<RwLock<HashMap<GameId, GameSlot>>>,
}

impl GameStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game store");
        Self::default()
    }

    /// Starts a new game and returns its ID and initial state.
    #[instrument(skip(self))]
    pub fn create(&self, starting: Mark) -> Result<(GameId, GameState), StoreError> {
        let id = Uuid::new_v4().to_string();
        let initial = GameState::new(starting);
        let slot = Arc::new(Mutex::new(History::new(initial.clone())));

        self.games
            .write()
            .map_err(|_| StoreError::LockPoisoned)?
            .insert(id.clone(), slot);

        info!(game_id = %id, %starting, "Created new game");
        Ok((id, initial))
    }

    /// Returns the latest state of a game.
    #[instrument(skip(self))]
    pub fn latest(&self, id: &str) -> Result<GameState, StoreError> {
        let slot = self.slot(id)?;
        let history = slot.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(history.latest().clone())
    }

    /// Returns every state of a game, oldest first.
    #[instrument(skip(self))]
    pub fn history(&self, id: &str) -> Result<Vec<GameState>, StoreError> {
        let slot = self.slot(id)?;
        let history = slot.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(history.states().to_vec())
    }

    /// Applies a move to the latest state of a game and appends the result.
    ///
    /// The game's lock is held from reading the latest state to appending
    /// the new one.
    #[instrument(skip(self))]
    pub fn apply_move(
        &self,
        id: &str,
        board_index: usize,
        cell_index: usize,
    ) -> Result<GameState, StoreError> {
        let slot = self.slot(id)?;
        let mut history = slot.lock().map_err(|_| StoreError::LockPoisoned)?;

        let next = history
            .apply_move(board_index, cell_index)
            .inspect_err(|e| warn!(game_id = id, error = %e, "Invalid move"))?
            .clone();

        info!(
            game_id = id,
            board_index,
            cell_index,
            status = %next.status(),
            "Move completed successfully"
        );
        Ok(next)
    }

    /// Removes a game. Returns false if it did not exist.
    #[instrument(skip(self))]
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let removed = self
            .games
            .write()
            .map_err(|_| StoreError::LockPoisoned)?
            .remove(id)
            .is_some();
        if removed {
            info!(game_id = id, "Deleted game");
        } else {
            debug!(game_id = id, "Delete of unknown game");
        }
        Ok(removed)
    }

    /// Lists all game IDs.
    #[instrument(skip(self))]
    pub fn ids(&self) -> Result<Vec<GameId>, StoreError> {
        let games = self.games.read().map_err(|_| StoreError::LockPoisoned)?;
        let ids: Vec<_> = games.keys().cloned().collect();
        debug!(count = ids.len(), "Listed games");
        Ok(ids)
    }

    fn slot(&self, id: &str) -> Result<GameSlot, StoreError> {
        let games = self.games.read().map_err(|_| StoreError::LockPoisoned)?;
        games.get(id).cloned().ok_or_else(|| {
            debug!(game_id = id, "Game not found");
            StoreError::NotFound { id: id.to_string() }
        })
    }
}
