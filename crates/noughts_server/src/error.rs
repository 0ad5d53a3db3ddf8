//! HTTP-facing error type.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error, From};
use noughts_engine::{BoardError, EngineError};
use serde_json::json;
use tracing::{error, warn};

/// Everything a request can fail with.
///
/// Bad input maps to 400; an engine invariant violation maps to 500.
#[derive(Debug, Display, Error, From)]
pub enum ApiError {
    /// No `board` parameter, or an empty one.
    #[display("Board state is required")]
    MissingBoard,

    /// The board did not parse as a 3x3 grid.
    #[display("Invalid board state: {}", _0.kind())]
    #[from]
    InvalidBoard(BoardError),

    /// The mark is neither `X` nor `O`.
    #[display("Unknown mark {token:?} (expected X or O)")]
    UnknownMark {
        /// Token supplied.
        token: String,
    },

    /// The engine broke an internal invariant.
    #[display("Failed to calculate move: {}", _0.kind())]
    #[from]
    Engine(EngineError),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Engine(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = ?self, "Request failed");
        } else {
            warn!(error = %self, "Rejected request");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
