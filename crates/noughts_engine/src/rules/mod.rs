//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state.
//! Rules are separated from board storage so the engine and the
//! game-loop termination check share one definition of "won" and "full".

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::{is_draw, is_full};
pub use moves::legal_moves;
pub use win::{LINES, check_winner, has_win};

use super::types::{Board, GameStatus};
use tracing::instrument;

/// Evaluates the board: won, drawn or still in progress.
///
/// A win takes precedence over a full board.
#[instrument]
pub fn status(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_status_in_progress() {
        assert_eq!(status(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_status_win_on_full_board() {
        // X X X / O O X / X O O
        let board: Board = "XXXOOXXOO".parse().unwrap();
        assert_eq!(status(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_status_draw() {
        // X O X / O X X / O X O
        let board: Board = "XOXOXXOXO".parse().unwrap();
        assert_eq!(status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_status_win_before_full() {
        let board = Board::new()
            .with(Position::TopRight, Player::O)
            .with(Position::Center, Player::O)
            .with(Position::BottomLeft, Player::O);
        assert_eq!(status(&board), GameStatus::Won(Player::O));
    }
}
