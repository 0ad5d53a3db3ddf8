//! Engine error types.
//!
//! These signal a broken internal invariant, never bad input: boards are
//! validated when parsed, and a full board is answered with
//! [`Move::NoMove`](super::Move::NoMove).

use super::super::Position;
use derive_more::{Display, Error};

/// Which invariant broke.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineErrorKind {
    /// A strategy returned nothing although legal moves exist.
    #[display("{strategy} produced no move for a board with {empty} empty squares")]
    NoCandidate {
        /// Strategy that failed.
        strategy: &'static str,
        /// Empty squares on the board.
        empty: usize,
    },

    /// A strategy picked a square that is already taken.
    #[display("{strategy} chose occupied square {position}")]
    OccupiedSquare {
        /// Strategy that failed.
        strategy: &'static str,
        /// The square it chose.
        position: Position,
    },
}

/// Engine invariant violation with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// What went wrong.
    pub kind: EngineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns which invariant broke.
    pub fn kind(&self) -> &EngineErrorKind {
        &self.kind
    }
}
