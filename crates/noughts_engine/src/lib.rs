//! Tic-tac-toe rules and a computer opponent.
//!
//! # Architecture
//!
//! - **Board**: [`Board`], [`Position`], [`Square`], [`Player`]; parsing from
//!   the JSON grid and compact wire forms ([`BoardError`] on bad input)
//! - **Rules**: [`has_win`], [`is_full`], [`legal_moves`], [`status`]
//! - **Engine**: [`Engine::select_move`] with four [`Difficulty`] tiers
//!
//! # Example
//!
//! ```
//! use noughts_engine::{Board, Difficulty, Engine, Move, Player, Position};
//! use rand::SeedableRng;
//!
//! let board: Board = r#"[["X","X",""],["O","O",""],["","",""]]"#.parse()?;
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//!
//! let mov = Engine::new(Player::O).select_move(&board, Difficulty::Blocking, &mut rng)?;
//! assert_eq!(mov, Move::Place(Position::MiddleRight));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod parse;
mod position;
pub mod rules;
mod types;

pub use engine::{
    Coordinates, CoordinatesError, Difficulty, Engine, EngineError, EngineErrorKind, Move,
    SCORE_MAX, SCORE_MIN, Score, SearchOutcome, blocking_move, minimax_move, minimax_pruned_move,
    random_move, winning_move,
};
pub use parse::{BoardError, BoardErrorKind};
pub use position::Position;
pub use rules::{check_winner, has_win, is_draw, is_full, legal_moves, status};
pub use types::{Board, GameStatus, Player, Square};
