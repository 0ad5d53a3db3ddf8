//! Legal move enumeration.

use super::super::{Board, Position};

/// All empty cells in row-major order.
///
/// The order is part of the contract: strategies keep the first move that
/// achieves the best result, so this order decides ties.
pub fn legal_moves(board: &Board) -> Vec<Position> {
    Position::ALL
        .into_iter()
        .filter(|&pos| board.is_empty(pos))
        .collect()
}
