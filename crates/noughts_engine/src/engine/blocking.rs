//! Single-ply heuristic: win if possible, otherwise block.

use super::super::rules::{has_win, legal_moves};
use super::super::{Board, Player, Position};
use super::random::random_move;
use rand::Rng;
use tracing::debug;

/// First cell (row-major) where `player` would complete a line.
pub fn winning_move(board: &Board, player: Player) -> Option<Position> {
    legal_moves(board)
        .into_iter()
        .find(|&pos| has_win(&board.with(pos, player), player))
}

/// Takes a winning move for `mark`, else blocks the opponent's winning
/// cell, else plays at random.
///
/// Both scans run in row-major order, so the first qualifying cell wins.
/// A win anywhere on the board takes priority over any block.
pub fn blocking_move<R: Rng + ?Sized>(
    board: &Board,
    mark: Player,
    rng: &mut R,
) -> Option<Position> {
    if let Some(pos) = winning_move(board, mark) {
        debug!(position = %pos, "Taking winning move");
        return Some(pos);
    }
    if let Some(pos) = winning_move(board, mark.opponent()) {
        debug!(position = %pos, "Blocking opponent");
        return Some(pos);
    }
    random_move(board, rng)
}
