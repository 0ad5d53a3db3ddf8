//! Exhaustive property checks over the whole 3x3 state space.

use noughts_engine::{
    Board, Difficulty, Engine, GameStatus, Move, Player, Position, Square, has_win, is_full,
    legal_moves, minimax_move, minimax_pruned_move, status,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// Every assignment of {Empty, X, O} to the nine cells, reachable or not.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(9)).map(|mut code| {
        let mut squares = [Square::Empty; 9];
        for square in &mut squares {
            *square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Player::X),
                _ => Square::Occupied(Player::O),
            };
            code /= 3;
        }
        Board::from_squares(squares)
    })
}

/// Non-terminal positions reachable from the empty board with X moving
/// first, paired with the side to move.
fn reachable_positions() -> Vec<(Board, Player)> {
    fn walk(
        board: Board,
        to_move: Player,
        seen: &mut HashSet<Board>,
        out: &mut Vec<(Board, Player)>,
    ) {
        if status(&board).is_over() || !seen.insert(board) {
            return;
        }
        out.push((board, to_move));
        for pos in legal_moves(&board) {
            walk(board.with(pos, to_move), to_move.opponent(), seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(Board::new(), Player::X, &mut seen, &mut out);
    out
}

#[test]
fn test_full_iff_no_legal_moves() {
    for board in all_boards() {
        assert_eq!(
            is_full(&board),
            legal_moves(&board).is_empty(),
            "{}",
            board.display()
        );
    }
}

#[test]
fn test_reachable_position_count() {
    // 5478 legal positions, 958 of them terminal
    assert_eq!(reachable_positions().len(), 5478 - 958);
}

fn assert_legal_or_sentinel(board: &Board, mov: Move, difficulty: Difficulty) {
    match mov {
        Move::Place(pos) => assert!(
            board.is_empty(pos),
            "{difficulty} played occupied {pos} on\n{}",
            board.display()
        ),
        Move::NoMove => assert!(
            is_full(board),
            "{difficulty} gave up on a board with moves\n{}",
            board.display()
        ),
    }
}

#[test]
fn test_every_board_gets_a_legal_move_or_sentinel() {
    let engine = Engine::new(Player::O);
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for board in all_boards() {
        for difficulty in [
            Difficulty::Random,
            Difficulty::Blocking,
            Difficulty::MinimaxPruned,
        ] {
            let mov = engine.select_move(&board, difficulty, &mut rng).unwrap();
            assert_legal_or_sentinel(&board, mov, difficulty);
        }
    }
}

#[test]
fn test_exhaustive_minimax_legal_on_reachable_boards() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    for (board, to_move) in reachable_positions() {
        let mov = Engine::new(to_move)
            .select_move(&board, Difficulty::Minimax, &mut rng)
            .unwrap();
        assert_legal_or_sentinel(&board, mov, Difficulty::Minimax);
    }
}

#[test]
fn test_pruning_never_changes_the_chosen_move() {
    for (board, to_move) in reachable_positions() {
        for mark in [to_move, to_move.opponent()] {
            let full = minimax_move(&board, mark).unwrap();
            let pruned = minimax_pruned_move(&board, mark).unwrap();
            assert_eq!(
                (full.position, full.score),
                (pruned.position, pruned.score),
                "{mark} on\n{}",
                board.display()
            );
            assert!(pruned.nodes <= full.nodes);
        }
    }
}

#[test]
fn test_selection_leaves_board_untouched() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for (board, to_move) in reachable_positions().into_iter().step_by(37) {
        let engine = Engine::new(to_move);
        let before = board;
        for difficulty in [
            Difficulty::Random,
            Difficulty::Blocking,
            Difficulty::Minimax,
            Difficulty::MinimaxPruned,
        ] {
            let _ = engine.select_move(&board, difficulty, &mut rng);
            assert_eq!(board, before);
        }
    }
}

/// Plays `engine` against every possible opponent continuation and
/// returns the worst outcome seen from the engine's side.
fn worst_outcome(board: Board, engine: Engine, difficulty: Difficulty, engine_to_move: bool) -> i8 {
    match status(&board) {
        GameStatus::Won(winner) if winner == engine.mark() => return 1,
        GameStatus::Won(_) => return -1,
        GameStatus::Draw => return 0,
        GameStatus::InProgress => {}
    }

    if engine_to_move {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let pos = engine
            .select_move(&board, difficulty, &mut rng)
            .unwrap()
            .position()
            .expect("board is not full");
        let next = board.with(pos, engine.mark());
        worst_outcome(next, engine, difficulty, false)
    } else {
        let opponent = engine.opponent();
        legal_moves(&board)
            .into_iter()
            .map(|pos| worst_outcome(board.with(pos, opponent), engine, difficulty, true))
            .min()
            .unwrap_or(0)
    }
}

#[test]
fn test_optimal_tiers_never_lose() {
    for difficulty in [Difficulty::Minimax, Difficulty::MinimaxPruned] {
        for mark in [Player::X, Player::O] {
            let engine = Engine::new(mark);
            let first = worst_outcome(Board::new(), engine, difficulty, true);
            let second = worst_outcome(Board::new(), engine, difficulty, false);
            assert!(first >= 0, "{difficulty} {mark} first");
            assert!(second >= 0, "{difficulty} {mark} second");
        }
    }
}

#[test]
fn test_blocking_fills_every_open_two_in_a_line() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    for engine_mark in [Player::O, Player::X] {
        let engine = Engine::new(engine_mark);
        for line in noughts_engine::rules::LINES {
            for gap in 0..3 {
                let mut board = Board::new();
                for (i, &pos) in line.iter().enumerate() {
                    if i != gap {
                        board.set(pos, Square::Occupied(engine.opponent()));
                    }
                }
                let mov = engine
                    .select_move(&board, Difficulty::Blocking, &mut rng)
                    .unwrap();
                assert_eq!(mov, Move::Place(line[gap]), "{line:?} gap {gap}");
            }
        }
    }
}

fn wins_for(board: &Board, pos: Position, mark: Player) -> bool {
    has_win(&board.with(pos, mark), mark)
}

#[test]
fn test_blocking_takes_every_open_win() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let engine = Engine::new(Player::O);
    for line in noughts_engine::rules::LINES {
        for gap in 0..3 {
            let mut board = Board::new();
            for (i, &pos) in line.iter().enumerate() {
                if i != gap {
                    board.set(pos, Square::Occupied(Player::O));
                }
            }
            let mov = engine
                .select_move(&board, Difficulty::Blocking, &mut rng)
                .unwrap();
            let Move::Place(pos) = mov else {
                panic!("no move for {line:?}");
            };
            // Any winning cell is acceptable when two lines are open, but it
            // must be the first one in row-major order.
            let first_win = Position::ALL
                .into_iter()
                .find(|&p| board.is_empty(p) && wins_for(&board, p, Player::O));
            assert_eq!(Some(pos), first_win);
            assert!(wins_for(&board, pos, Player::O));
        }
    }
}
