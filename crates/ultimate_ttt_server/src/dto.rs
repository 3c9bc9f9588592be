//! Wire types for the REST API.

use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use crate::store::GameId;
use ultimate_ttt::{GameState, Mark};

/// Full view of one game state, as sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateDto {
    /// Game ID assigned by the store.
    pub id: String,
    /// Nine sub-boards of nine cells each.
    pub boards: [[Option<Mark>; 9]; 9],
    /// Recorded winner of each sub-board.
    pub mini_winners: [Option<Mark>; 9],
    /// Forced sub-board index, or `null` when any open board is allowed.
    pub active_board: Option<u8>,
    /// Mark to move.
    pub current_player: Mark,
    /// Overall winner.
    pub winner: Option<Mark>,
    /// True once the game is drawn.
    pub is_draw: bool,
    /// Human-readable status, e.g. `"X's turn"`.
    pub status: String,
}

impl GameStateDto {
    /// Builds the wire view of `state` for game `id`.
    #[instrument(skip(state))]
    pub fn from_state(id: &str, state: &GameState) -> Self {
        Self {
            id: id.to_string(),
            boards: std::array::from_fn(|b| {
                std::array::from_fn(|c| state.boards()[b].squares()[c].mark())
            }),
            mini_winners: std::array::from_fn(|b| state.mini_winners()[b].mark()),
            active_board: state.active_board().map(u8::from),
            current_player: state.current_player(),
            winner: state.winner(),
            is_draw: state.is_draw(),
            status: state.status().to_string(),
        }
    }
}

/// Body of `POST /tictactoe/new`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, new)]
pub struct CreateGameRequest {
    /// `"X"` or `"O"`; anything else, or nothing, starts with X.
    #[serde(default)]
    pub starting_player: Option<String>,
}

impl CreateGameRequest {
    /// The starting mark this request asks for.
    pub fn starting_mark(&self) -> Mark {
        Mark::parse_or_default(self.starting_player.as_deref())
    }
}

/// Body of `POST /tictactoe/{id}/move`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, new)]
pub struct MoveRequest {
    /// Target sub-board (0-8).
    pub board_index: i64,
    /// Target cell (0-8).
    pub cell_index: i64,
}

impl MoveRequest {
    /// Indices as the engine takes them.
    ///
    /// Negative values become `usize::MAX` so the engine reports them as out
    /// of range after its game-over check.
    pub fn indices(&self) -> (usize, usize) {
        let clamp = |v: i64| usize::try_from(v).unwrap_or(usize::MAX);
        (clamp(self.board_index), clamp(self.cell_index))
    }
}

/// Error body returned with 4xx/5xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct ErrorBody {
    /// What went wrong.
    pub detail: String,
}

/// Body of `GET /tictactoe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct GameListResponse {
    /// IDs of every live game.
    pub games: Vec<GameId>,
}

/// Body of `DELETE /tictactoe/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Whether a game was removed.
    pub ok: bool,
    /// Why nothing was removed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl DeleteResponse {
    /// A game was removed.
    pub fn deleted() -> Self {
        Self { ok: true, reason: None }
    }

    /// No game had that ID.
    pub fn not_found() -> Self {
        Self {
            ok: false,
            reason: Some("not found".to_string()),
        }
    }
}
