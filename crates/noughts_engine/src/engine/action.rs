//! The engine's answer: a cell to play, or nothing.

use super::super::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A move chosen by the engine.
///
/// On the wire this is `{"row": r, "col": c}`; [`Move::NoMove`] is the
/// sentinel `{"row": -1, "col": -1}` returned for a full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Coordinates", try_from = "Coordinates")]
pub enum Move {
    /// Place the engine's mark here.
    Place(Position),
    /// No legal move exists.
    NoMove,
}

impl Move {
    /// The position to play, if any.
    pub fn position(self) -> Option<Position> {
        match self {
            Move::Place(pos) => Some(pos),
            Move::NoMove => None,
        }
    }

    /// Row and column, `(-1, -1)` for [`Move::NoMove`].
    pub fn coordinates(self) -> Coordinates {
        self.into()
    }
}

impl From<Option<Position>> for Move {
    fn from(pos: Option<Position>) -> Self {
        pos.map_or(Move::NoMove, Move::Place)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place(pos) => write!(f, "{pos}"),
            Move::NoMove => write!(f, "no move"),
        }
    }
}

/// Wire form of a [`Move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Row, 0-2 or -1.
    pub row: i8,
    /// Column, 0-2 or -1.
    pub col: i8,
}

impl Coordinates {
    /// The "no move" sentinel.
    pub const SENTINEL: Coordinates = Coordinates { row: -1, col: -1 };
}

impl From<Move> for Coordinates {
    fn from(mov: Move) -> Self {
        match mov {
            // row and col are always 0-2
            Move::Place(pos) => Coordinates {
                row: pos.row() as i8,
                col: pos.col() as i8,
            },
            Move::NoMove => Coordinates::SENTINEL,
        }
    }
}

/// Coordinates that name neither a cell nor the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("no cell at ({row}, {col})")]
pub struct CoordinatesError {
    /// Row supplied.
    pub row: i8,
    /// Column supplied.
    pub col: i8,
}

impl TryFrom<Coordinates> for Move {
    type Error = CoordinatesError;

    fn try_from(c: Coordinates) -> Result<Self, Self::Error> {
        if c == Coordinates::SENTINEL {
            return Ok(Move::NoMove);
        }
        let err = CoordinatesError {
            row: c.row,
            col: c.col,
        };
        let row = usize::try_from(c.row).map_err(|_| err)?;
        let col = usize::try_from(c.col).map_err(|_| err)?;
        Position::from_coords(row, col).map(Move::Place).ok_or(err)
    }
}
