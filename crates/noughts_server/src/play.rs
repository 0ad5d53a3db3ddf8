//! Request parameters to engine calls.
//!
//! Shared by the HTTP handlers and the CLI so both reject the same inputs
//! with the same messages.

use crate::config::ServerConfig;
use crate::error::ApiError;
use noughts_engine::{Board, Difficulty, Engine, GameStatus, Move, Player, status};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Parses a required board parameter.
pub fn parse_board(board: Option<&str>) -> Result<Board, ApiError> {
    match board {
        None | Some("") => Err(ApiError::MissingBoard),
        Some(raw) => Ok(raw.parse()?),
    }
}

/// Parses a difficulty token.
///
/// An absent token selects `default`. A token that names no tier plays
/// [`Difficulty::Random`]. Tokens are matched exactly.
pub fn parse_difficulty(token: Option<&str>, default: Difficulty) -> Difficulty {
    match token {
        None | Some("") => default,
        Some(token) => token.parse().unwrap_or_else(|_| {
            warn!(token, "Unknown difficulty, playing random");
            Difficulty::Random
        }),
    }
}

/// Parses a mark, falling back to `default` when absent.
pub fn parse_mark(token: Option<&str>, default: Player) -> Result<Player, ApiError> {
    match token {
        None | Some("") => Ok(default),
        Some(token) => token.parse().map_err(|_| ApiError::UnknownMark {
            token: token.to_string(),
        }),
    }
}

/// Parses the parameters and asks the engine for a move.
#[instrument(skip(config, rng))]
pub fn compute_move<R: Rng + ?Sized>(
    config: &ServerConfig,
    board: Option<&str>,
    difficulty: Option<&str>,
    mark: Option<&str>,
    rng: &mut R,
) -> Result<Move, ApiError> {
    let board = parse_board(board)?;
    let difficulty = parse_difficulty(difficulty, *config.default_difficulty());
    let mark = parse_mark(mark, *config.engine_mark())?;
    debug!(%difficulty, %mark, board = %board.display(), "Selecting move");

    let mov = Engine::new(mark).select_move(&board, difficulty, rng)?;
    info!(%difficulty, %mark, chosen = %mov, "Agent move calculated");
    Ok(mov)
}

/// Game state as reported to the page script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Moves remain and nobody has a line.
    InProgress,
    /// Someone has a line.
    Won,
    /// Full board, no line.
    Draw,
}

/// Body of `GET /game-status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Overall state.
    pub status: StatusKind,
    /// The winner, if any.
    pub winner: Option<Player>,
}

impl From<GameStatus> for StatusResponse {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::InProgress => Self {
                status: StatusKind::InProgress,
                winner: None,
            },
            GameStatus::Won(player) => Self {
                status: StatusKind::Won,
                winner: Some(player),
            },
            GameStatus::Draw => Self {
                status: StatusKind::Draw,
                winner: None,
            },
        }
    }
}

/// Parses a board and evaluates whether the game is over.
#[instrument]
pub fn compute_status(board: Option<&str>) -> Result<StatusResponse, ApiError> {
    let board = parse_board(board)?;
    Ok(status(&board).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_engine::Position;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_missing_and_empty_board_rejected() {
        assert!(matches!(parse_board(None), Err(ApiError::MissingBoard)));
        assert!(matches!(parse_board(Some("")), Err(ApiError::MissingBoard)));
    }

    #[test]
    fn test_difficulty_defaults_when_absent() {
        let default = Difficulty::Minimax;
        assert_eq!(parse_difficulty(None, default), default);
        assert_eq!(parse_difficulty(Some(""), default), default);
        assert_eq!(
            parse_difficulty(Some("impossible"), Difficulty::Random),
            Difficulty::MinimaxPruned
        );
    }

    #[test]
    fn test_unrecognized_difficulty_plays_random() {
        for token in ["extreme", "HARD", "Normal", " easy"] {
            assert_eq!(
                parse_difficulty(Some(token), Difficulty::Minimax),
                Difficulty::Random,
                "{token}"
            );
        }
    }

    #[test]
    fn test_mark_parsing() {
        assert_eq!(parse_mark(Some("x"), Player::O).unwrap(), Player::X);
        assert_eq!(parse_mark(None, Player::O).unwrap(), Player::O);
        assert!(matches!(
            parse_mark(Some("Z"), Player::O),
            Err(ApiError::UnknownMark { .. })
        ));
    }

    #[test]
    fn test_compute_move_uses_configured_mark() {
        let config = ServerConfig::default().with_engine_mark(Player::X);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        // X X . / O O . / . . .  as X, the win is (0,2)
        let mov =
            compute_move(&config, Some("XX.OO...."), Some("normal"), None, &mut rng).unwrap();
        assert_eq!(mov, Move::Place(Position::TopRight));
    }

    #[test]
    fn test_status_serialization() {
        let won = compute_status(Some("XXXOO....")).unwrap();
        assert_eq!(
            serde_json::to_string(&won).unwrap(),
            r#"{"status":"won","winner":"X"}"#
        );
        let open = compute_status(Some(".........")).unwrap();
        assert_eq!(
            serde_json::to_string(&open).unwrap(),
            r#"{"status":"in_progress","winner":null}"#
        );
    }
}
