//! REST routes over the game store.

use crate::dto::{
    CreateGameRequest, DeleteResponse, ErrorBody, GameListResponse, GameStateDto, MoveRequest,
};
use crate::store::{GameStore, StoreError};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use derive_more::{Display, From};
use tracing::{error, instrument, warn};

/// Builds the `/tictactoe` router over `store`.
#[instrument(skip(store))]
pub fn router(store: GameStore) -> Router {
    Router::new()
        .route("/tictactoe", get(list_games))
        .route("/tictactoe/new", post(create_game))
        .route("/tictactoe/{id}", get(get_state).delete(delete_game))
        .route("/tictactoe/{id}/history", get(get_history))
        .route("/tictactoe/{id}/move", post(make_move))
        .with_state(store)
}

/// Request failures mapped onto HTTP responses.
///
/// Every variant answers with an [`ErrorBody`].
#[derive(Debug, Display, From)]
pub enum ApiError {
    /// The store or the engine refused the request.
    Store(StoreError),
    /// The request body was not valid JSON for the route.
    Body(JsonRejection),
}

impl ApiError {
    /// Status code this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::Move(_)) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::LockPoisoned) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Body(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            ApiError::Store(StoreError::LockPoisoned) => {
                error!("Game store lock poisoned");
                self.to_string()
            }
            ApiError::Store(e) => e.to_string(),
            ApiError::Body(rejection) => {
                warn!(error = %rejection, "Rejected request body");
                rejection.body_text()
            }
        };
        (status, Json(ErrorBody::new(detail))).into_response()
    }
}

#[instrument(skip(store))]
async fn list_games(State(store): State<GameStore>) -> Result<Json<GameListResponse>, ApiError> {
    Ok(Json(GameListResponse::new(store.ids()?)))
}

#[instrument(skip(store))]
async fn create_game(
    State(store): State<GameStore>,
    payload: Result<Option<Json<CreateGameRequest>>, JsonRejection>,
) -> Result<Json<GameStateDto>, ApiError> {
    let request = payload?.map(|Json(r)| r).unwrap_or_default();
    let (id, state) = store.create(request.starting_mark())?;
    Ok(Json(GameStateDto::from_state(&id, &state)))
}

#[instrument(skip(store))]
async fn get_state(
    State(store): State<GameStore>,
    Path(id): Path<String>,
) -> Result<Json<GameStateDto>, ApiError> {
    let state = store.latest(&id)?;
    Ok(Json(GameStateDto::from_state(&id, &state)))
}

#[instrument(skip(store))]
async fn get_history(
    State(store): State<GameStore>,
    Path(id): Path<String>,
) -> Result<Json<Vec<GameStateDto>>, ApiError> {
    let states = store.history(&id)?;
    Ok(Json(
        states
            .iter()
            .map(|state| GameStateDto::from_state(&id, state))
            .collect(),
    ))
}

#[instrument(skip(store))]
async fn make_move(
    State(store): State<GameStore>,
    Path(id): Path<String>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<GameStateDto>, ApiError> {
    let Json(payload) = payload?;
    let (board_index, cell_index) = payload.indices();
    let state = store.apply_move(&id, board_index, cell_index)?;
    Ok(Json(GameStateDto::from_state(&id, &state)))
}

#[instrument(skip(store))]
async fn delete_game(
    State(store): State<GameStore>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let response = if store.delete(&id)? {
        DeleteResponse::deleted()
    } else {
        DeleteResponse::not_found()
    };
    Ok(Json(response))
}
