//! Move selection.
//!
//! [`Engine::select_move`] is the single entry point: it dispatches on
//! [`Difficulty`] to one of four strategies, then checks the chosen cell
//! against the board before returning it.

mod action;
mod blocking;
mod difficulty;
mod error;
mod minimax;
mod random;

pub use action::{Coordinates, CoordinatesError, Move};
pub use blocking::{blocking_move, winning_move};
pub use difficulty::Difficulty;
pub use error::{EngineError, EngineErrorKind};
pub use minimax::{SCORE_MAX, SCORE_MIN, Score, SearchOutcome, minimax_move, minimax_pruned_move};
pub use random::random_move;

use super::rules::legal_moves;
use super::{Board, Player, Position};
use rand::Rng;
use tracing::{debug, error, instrument};

/// A computer opponent playing one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct Engine {
    mark: Player,
}

impl Engine {
    /// The mark this engine places.
    pub fn mark(&self) -> Player {
        self.mark
    }

    /// The mark it plays against.
    pub fn opponent(&self) -> Player {
        self.mark.opponent()
    }

    /// Chooses a move for this engine's mark.
    ///
    /// The board is read, never modified. A full board yields
    /// [`Move::NoMove`] for every difficulty. `rng` is consumed only by the
    /// random tier and by the blocking tier's fallback.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if a strategy breaks its own contract
    /// (no move on a board with empty squares, or an occupied square).
    #[instrument(skip_all, fields(mark = %self.mark, %difficulty))]
    pub fn select_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<Move, EngineError> {
        let empty = legal_moves(board).len();
        if empty == 0 {
            debug!("Board is full, no move");
            return Ok(Move::NoMove);
        }

        let (strategy, chosen) = match difficulty {
            Difficulty::Random => ("random", random_move(board, rng)),
            Difficulty::Blocking => ("blocking", blocking_move(board, self.mark, rng)),
            Difficulty::Minimax => ("minimax", self.searched(board, minimax_move)),
            Difficulty::MinimaxPruned => {
                ("minimax-pruned", self.searched(board, minimax_pruned_move))
            }
        };

        let position = chosen.ok_or_else(|| {
            error!(strategy, empty, "Strategy produced no move");
            EngineError::new(EngineErrorKind::NoCandidate { strategy, empty })
        })?;

        if !board.is_empty(position) {
            error!(strategy, %position, "Strategy chose an occupied square");
            let kind = EngineErrorKind::OccupiedSquare { strategy, position };
            return Err(EngineError::new(kind));
        }

        debug!(strategy, %position, "Move selected");
        Ok(Move::Place(position))
    }

    fn searched(
        &self,
        board: &Board,
        search: fn(&Board, Player) -> Option<SearchOutcome>,
    ) -> Option<Position> {
        let outcome = search(board, self.mark)?;
        debug!(
            score = outcome.score,
            nodes = outcome.nodes,
            "Search complete"
        );
        Some(outcome.position)
    }
}
