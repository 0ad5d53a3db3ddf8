//! Optimal play by game-tree search.
//!
//! Scores are from the engine's point of view. A terminal position is worth
//! `10 - depth` when the engine has a line, `depth - 10` when the opponent
//! has one, and `0` when the board is full, so faster wins and slower
//! losses score better. Depth counts plies below the engine's candidate
//! move: the opponent's reply is at depth 0.
//!
//! Every node works on its own copy of the board.

use super::super::rules::{has_win, is_full, legal_moves};
use super::super::{Board, Player, Position};

/// Position value from the engine's point of view.
pub type Score = i32;

/// Lower bound on any score; the initial value of a maximizing node.
pub const SCORE_MIN: Score = -1000;

/// Upper bound on any score; the initial value of a minimizing node.
pub const SCORE_MAX: Score = 1000;

const WIN: Score = 10;

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The chosen move.
    pub position: Position,
    /// Its value. Exact for both search variants.
    pub score: Score,
    /// Nodes visited below the root.
    pub nodes: u64,
}

/// Recursive searcher for one engine mark.
#[derive(Debug, Clone)]
struct Searcher {
    engine: Player,
    opponent: Player,
    nodes: u64,
}

impl Searcher {
    fn new(engine: Player) -> Self {
        Self {
            engine,
            opponent: engine.opponent(),
            nodes: 0,
        }
    }

    fn terminal_score(&self, board: &Board, depth: Score) -> Option<Score> {
        if has_win(board, self.engine) {
            Some(WIN - depth)
        } else if has_win(board, self.opponent) {
            Some(depth - WIN)
        } else if is_full(board) {
            Some(0)
        } else {
            None
        }
    }

    fn to_move(&self, maximizing: bool) -> Player {
        if maximizing {
            self.engine
        } else {
            self.opponent
        }
    }

    fn minimax(&mut self, board: Board, depth: Score, maximizing: bool) -> Score {
        self.nodes += 1;
        if let Some(score) = self.terminal_score(&board, depth) {
            return score;
        }

        let mark = self.to_move(maximizing);
        let children = legal_moves(&board)
            .into_iter()
            .map(|pos| self.minimax(board.with(pos, mark), depth + 1, !maximizing));

        if maximizing {
            children.fold(SCORE_MIN, Score::max)
        } else {
            children.fold(SCORE_MAX, Score::min)
        }
    }

    fn alpha_beta(
        &mut self,
        board: Board,
        depth: Score,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Score {
        self.nodes += 1;
        if let Some(score) = self.terminal_score(&board, depth) {
            return score;
        }

        let mark = self.to_move(maximizing);
        if maximizing {
            let mut best = SCORE_MIN;
            for pos in legal_moves(&board) {
                let score = self.alpha_beta(board.with(pos, mark), depth + 1, alpha, beta, false);
                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = SCORE_MAX;
            for pos in legal_moves(&board) {
                let score = self.alpha_beta(board.with(pos, mark), depth + 1, alpha, beta, true);
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    /// Exact value of the opponent's reply, by exhaustive search.
    fn full_reply(&mut self, child: Board, _best_so_far: Score) -> Score {
        self.minimax(child, 0, false)
    }

    /// Value of the opponent's reply, exact whenever it beats `best_so_far`.
    fn pruned_reply(&mut self, child: Board, best_so_far: Score) -> Score {
        self.alpha_beta(child, 0, best_so_far, SCORE_MAX, false)
    }

    /// Root loop shared by both variants: keep the first move whose value
    /// is strictly greater than the best so far.
    fn root(
        &mut self,
        board: &Board,
        evaluate: fn(&mut Self, Board, Score) -> Score,
    ) -> Option<SearchOutcome> {
        let mut best: Option<(Position, Score)> = None;
        for pos in legal_moves(board) {
            let best_so_far = best.map_or(SCORE_MIN, |(_, score)| score);
            let child = board.with(pos, self.engine);
            let score = evaluate(self, child, best_so_far);
            if best.is_none_or(|(_, b)| score > b) {
                best = Some((pos, score));
            }
        }
        best.map(|(position, score)| SearchOutcome {
            position,
            score,
            nodes: self.nodes,
        })
    }
}

/// Exhaustive minimax for `engine` to move. `None` on a full board.
pub fn minimax_move(board: &Board, engine: Player) -> Option<SearchOutcome> {
    Searcher::new(engine).root(board, Searcher::full_reply)
}

/// Alpha-beta minimax for `engine` to move. `None` on a full board.
///
/// Picks exactly the move [`minimax_move`] picks. The root passes the best
/// value found so far as alpha, so a later candidate is only cut short
/// when it cannot be strictly better, and a candidate that is strictly
/// better is always scored exactly.
pub fn minimax_pruned_move(board: &Board, engine: Player) -> Option<SearchOutcome> {
    Searcher::new(engine).root(board, Searcher::pruned_reply)
}
