//! Cross-strategy integration tests on scrambled boards.

use eight_puzzle_solver::{solve, Board, Heuristic, Move, Strategy};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Every consecutive pair on the path must be a legal blank-swap labeled
/// with the reported move, starting at `start` and ending at the goal.
fn assert_path_is_valid(start: &Board, path: &[Board], moves: &[Move]) {
    assert_eq!(path.first(), Some(start));
    assert!(path.last().unwrap().is_goal());
    assert_eq!(moves.len(), path.len() - 1);
    for (step, window) in path.windows(2).enumerate() {
        let legal = window[0]
            .neighbors()
            .into_iter()
            .any(|(mv, board)| mv == moves[step] && board == window[1]);
        assert!(legal, "step {} is not a legal transition", step);
    }
}

/// Walk a seeded random sequence of legal moves away from the goal.
/// The result is solvable by construction and at most `steps` moves out.
fn walk_from_goal(seed: u64, steps: usize) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::goal();
    for _ in 0..steps {
        let options = board.neighbors();
        let (_, next) = options[rng.gen_range(0..options.len())];
        board = next;
    }
    board
}

#[test]
fn cost_guided_is_optimal_on_random_boards() {
    for seed in 0..3u64 {
        let board = Board::random_with_seed(seed);

        let bfs = solve(&board, Strategy::BreadthFirst, Heuristic::None);
        let manhattan = solve(&board, Strategy::CostGuided, Heuristic::ManhattanDistance);
        let misplaced = solve(&board, Strategy::CostGuided, Heuristic::MisplacedTiles);

        assert_eq!(manhattan.move_count(), bfs.move_count(), "seed {}", seed);
        assert_eq!(misplaced.move_count(), bfs.move_count(), "seed {}", seed);

        assert_path_is_valid(
            &board,
            bfs.path.as_ref().unwrap(),
            bfs.moves.as_ref().unwrap(),
        );
        assert_path_is_valid(
            &board,
            manhattan.path.as_ref().unwrap(),
            manhattan.moves.as_ref().unwrap(),
        );
        assert_path_is_valid(
            &board,
            misplaced.path.as_ref().unwrap(),
            misplaced.moves.as_ref().unwrap(),
        );
    }
}

#[test]
fn depth_first_solves_but_not_shorter_than_breadth_first() {
    let board = Board::random_with_seed(1);

    let bfs = solve(&board, Strategy::BreadthFirst, Heuristic::None);
    let dfs = solve(&board, Strategy::DepthFirst, Heuristic::None);

    assert!(dfs.move_count().unwrap() >= bfs.move_count().unwrap());
    assert_path_is_valid(
        &board,
        dfs.path.as_ref().unwrap(),
        dfs.moves.as_ref().unwrap(),
    );
}

#[test]
fn walked_scrambles_never_exceed_the_walk_length() {
    for seed in 0..10u64 {
        let steps = 12;
        let board = walk_from_goal(seed, steps);
        let result = solve(&board, Strategy::CostGuided, Heuristic::ManhattanDistance);
        assert!(result.solvable);
        assert!(
            result.move_count().unwrap() <= steps,
            "seed {}: optimal path longer than the scramble walk",
            seed
        );
    }
}

#[test]
fn identical_calls_return_identical_results() {
    let board = Board::random_with_seed(2);
    for (strategy, heuristic) in [
        (Strategy::BreadthFirst, Heuristic::None),
        (Strategy::CostGuided, Heuristic::MisplacedTiles),
        (Strategy::CostGuided, Heuristic::ManhattanDistance),
    ] {
        let first = solve(&board, strategy, heuristic);
        let second = solve(&board, strategy, heuristic);
        assert_eq!(first.path, second.path);
        assert_eq!(first.moves, second.moves);
        assert_eq!(first.states_expanded, second.states_expanded);
    }
}
