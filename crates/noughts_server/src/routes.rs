//! JSON endpoints.

use crate::error::ApiError;
use crate::play::{StatusResponse, compute_move, compute_status};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Query, State};
use noughts_engine::Coordinates;
use serde::Deserialize;
use tracing::instrument;

/// Query of `GET /agent-move`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentMoveQuery {
    /// JSON 3x3 grid or compact 9-cell board.
    pub board: Option<String>,
    /// `easy`, `normal`, `hard` or `impossible`.
    pub difficulty: Option<String>,
    /// Mark the computer plays.
    pub mark: Option<String>,
}

/// Query of `GET /game-status`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardQuery {
    /// JSON 3x3 grid or compact 9-cell board.
    pub board: Option<String>,
}

/// `GET /agent-move`: the computer's reply, `{"row": r, "col": c}`.
#[instrument(skip(state))]
pub async fn agent_move(
    State(state): State<AppState>,
    Query(query): Query<AgentMoveQuery>,
) -> Result<Json<Coordinates>, ApiError> {
    let mut rng = state.request_rng();
    let mov = compute_move(
        state.config(),
        query.board.as_deref(),
        query.difficulty.as_deref(),
        query.mark.as_deref(),
        &mut rng,
    )?;
    Ok(Json(mov.coordinates()))
}

/// `GET /game-status`: whether the board is won, drawn or still open.
#[instrument]
pub async fn game_status(
    Query(query): Query<BoardQuery>,
) -> Result<Json<StatusResponse>, ApiError> {
    compute_status(query.board.as_deref()).map(Json)
}
