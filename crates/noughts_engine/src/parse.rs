//! Parsing boards from their wire forms.
//!
//! Two forms are accepted:
//!
//! - a JSON 3x3 grid of `""`, `"X"`, `"O"`:
//!   `[["X","",""],["","O",""],["","",""]]`
//! - a compact 9-character row-major string where `.`, `-`, `_` or a space
//!   marks an empty cell: `X...O....`

use super::position::Position;
use super::types::{Board, Player, Square};
use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::{debug, instrument};

/// What was wrong with a board.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardErrorKind {
    /// The grid does not have exactly three rows.
    #[display("expected 3 rows, found {found}")]
    RowCount {
        /// Rows supplied.
        found: usize,
    },

    /// A row does not have exactly three cells.
    #[display("row {row} must have 3 cells, found {found}")]
    ColumnCount {
        /// Offending row.
        row: usize,
        /// Cells supplied.
        found: usize,
    },

    /// A cell holds something other than `""`, `"X"` or `"O"`.
    #[display("unrecognized cell value {value:?} at row {row}, col {col}")]
    UnknownSymbol {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
        /// The value found.
        value: String,
    },

    /// A compact board does not have exactly nine cells.
    #[display("compact board must have 9 cells, found {found}")]
    CompactLength {
        /// Cells supplied.
        found: usize,
    },

    /// The input is not well-formed JSON.
    #[display("malformed board JSON: {message}")]
    Syntax {
        /// Parser message.
        message: String,
    },
}

/// Board parsing error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Board error: {} at {}:{}", kind, file, line)]
pub struct BoardError {
    /// What went wrong.
    pub kind: BoardErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardError {
    /// Creates a new board error with caller location tracking.
    #[track_caller]
    pub fn new(kind: BoardErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns what went wrong, without the location.
    pub fn kind(&self) -> &BoardErrorKind {
        &self.kind
    }
}

#[track_caller]
fn unknown_symbol(row: usize, col: usize, value: impl ToString) -> BoardError {
    BoardError::new(BoardErrorKind::UnknownSymbol {
        row,
        col,
        value: value.to_string(),
    })
}

fn syntax_error(e: serde_json::Error) -> BoardError {
    let kind = BoardErrorKind::Syntax {
        message: e.to_string(),
    };
    BoardError::new(kind)
}

fn square_from_symbol(symbol: &str) -> Option<Square> {
    match symbol {
        "" => Some(Square::Empty),
        "X" => Some(Square::Occupied(Player::X)),
        "O" => Some(Square::Occupied(Player::O)),
        _ => None,
    }
}

fn square_from_compact(c: char) -> Option<Square> {
    match c {
        '.' | '-' | '_' | ' ' => Some(Square::Empty),
        'X' => Some(Square::Occupied(Player::X)),
        'O' => Some(Square::Occupied(Player::O)),
        _ => None,
    }
}

impl Board {
    /// Builds a board from a grid of wire symbols.
    ///
    /// The grid must be exactly 3x3 and every cell one of `""`, `"X"`, `"O"`.
    pub fn from_grid<S: AsRef<str>>(grid: &[Vec<S>]) -> Result<Self, BoardError> {
        if grid.len() != 3 {
            let kind = BoardErrorKind::RowCount { found: grid.len() };
            return Err(BoardError::new(kind));
        }

        let mut board = Board::new();
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != 3 {
                let kind = BoardErrorKind::ColumnCount {
                    row,
                    found: cells.len(),
                };
                return Err(BoardError::new(kind));
            }
            for (col, cell) in cells.iter().enumerate() {
                let value = cell.as_ref();
                let square = square_from_symbol(value)
                    .ok_or_else(|| unknown_symbol(row, col, value))?;
                if let Some(pos) = Position::from_coords(row, col) {
                    board.set(pos, square);
                }
            }
        }
        Ok(board)
    }

    /// Builds a board from the compact 9-character form.
    pub fn from_compact(s: &str) -> Result<Self, BoardError> {
        let cells: Vec<char> = s.chars().collect();
        if cells.len() != 9 {
            let kind = BoardErrorKind::CompactLength { found: cells.len() };
            return Err(BoardError::new(kind));
        }

        let mut board = Board::new();
        for (pos, c) in Position::ALL.into_iter().zip(cells) {
            let square = square_from_compact(c)
                .ok_or_else(|| unknown_symbol(pos.row(), pos.col(), c))?;
            board.set(pos, square);
        }
        Ok(board)
    }
}

impl FromStr for Board {
    type Err = BoardError;

    #[instrument(level = "debug")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim_start().starts_with('[') {
            let grid: Vec<Vec<String>> = serde_json::from_str(s).map_err(syntax_error)?;
            debug!("Parsing JSON grid");
            Board::from_grid(&grid)
        } else {
            debug!("Parsing compact board");
            Board::from_compact(s)
        }
    }
}
