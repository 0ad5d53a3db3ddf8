//! noughts server library.
//!
//! HTTP front end for the tic-tac-toe engine in `noughts_engine`.
//!
//! # Architecture
//!
//! - **Routes**: `GET /agent-move` and `GET /game-status` (JSON)
//! - **Pages**: `/`, `/game`, `/agent`, `/result` (HTML)
//! - **State**: configuration plus the process-wide random source
//!
//! # Example
//!
//! ```no_run
//! use noughts_server::{AppState, ServerConfig, router};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let state = AppState::new(ServerConfig::default());
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//! axum::serve(listener, router(state)).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod pages;
mod play;
mod routes;
mod state;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use pages::{ResultQuery, escape_html, render};
pub use play::{
    StatusKind, StatusResponse, compute_move, compute_status, parse_board, parse_difficulty,
    parse_mark,
};
pub use routes::{AgentMoveQuery, BoardQuery};
pub use state::AppState;

use axum::Router;
use axum::extract::Request;
use axum::routing::get;
use tower::ServiceBuilder;
use tracing::info;

fn log_request(req: Request) -> Request {
    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
    req
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::welcome))
        .route("/game", get(pages::game))
        .route("/agent", get(pages::agent))
        .route("/result", get(pages::result))
        .route("/agent-move", get(routes::agent_move))
        .route("/game-status", get(routes::game_status))
        .layer(ServiceBuilder::new().map_request(log_request))
        .with_state(state)
}
