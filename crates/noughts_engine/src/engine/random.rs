//! Uniform random play.

use super::super::rules::legal_moves;
use super::super::{Board, Position};
use rand::Rng;
use rand::seq::SliceRandom;

/// Picks a legal move uniformly at random, `None` on a full board.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    legal_moves(board).choose(rng).copied()
}
