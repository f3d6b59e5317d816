//! Heuristic evaluators for cost-guided search.
//!
//! Both evaluators are admissible and consistent: a single blank-swap
//! changes exactly one tile's position, so neither estimate can drop by
//! more than one per move or exceed the true remaining cost.

use crate::board::{Board, BLANK, CELLS, SIDE};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which estimate of remaining cost the search engine consults.
///
/// `None` is the constant-zero evaluator used by the uninformed
/// strategies; cost-guided search with `None` degrades to uniform-cost
/// search and stays optimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    None,
    MisplacedTiles,
    ManhattanDistance,
}

impl Heuristic {
    /// Nonnegative estimate of the remaining cost from `board` to goal.
    pub fn evaluate(self, board: &Board) -> u32 {
        match self {
            Heuristic::None => 0,
            Heuristic::MisplacedTiles => misplaced_tiles(board),
            Heuristic::ManhattanDistance => manhattan_distance(board),
        }
    }
}

/// Count of non-blank tiles that are not in their goal cell.
fn misplaced_tiles(board: &Board) -> u32 {
    let mut count = 0;
    for index in 0..CELLS {
        let tile = board.get(index / SIDE, index % SIDE);
        if tile != BLANK && tile as usize != index + 1 {
            count += 1;
        }
    }
    count
}

/// Sum over non-blank tiles of the grid distance to their goal cell.
fn manhattan_distance(board: &Board) -> u32 {
    let mut distance = 0u32;
    for row in 0..SIDE {
        for col in 0..SIDE {
            let tile = board.get(row, col);
            if tile == BLANK {
                continue;
            }
            let goal_row = (tile as usize - 1) / SIDE;
            let goal_col = (tile as usize - 1) % SIDE;
            distance += row.abs_diff(goal_row) as u32;
            distance += col.abs_diff(goal_col) as u32;
        }
    }
    distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_goal_scores_zero() {
        let goal = Board::goal();
        assert_eq!(Heuristic::None.evaluate(&goal), 0);
        assert_eq!(Heuristic::MisplacedTiles.evaluate(&goal), 0);
        assert_eq!(Heuristic::ManhattanDistance.evaluate(&goal), 0);
    }

    #[test]
    fn test_one_move_board_scores_one() {
        let board = Board::from_rows([[1, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
        assert_eq!(Heuristic::MisplacedTiles.evaluate(&board), 1);
        assert_eq!(Heuristic::ManhattanDistance.evaluate(&board), 1);
    }

    #[test]
    fn test_manhattan_dominates_misplaced() {
        let board = Board::from_rows([[1, 2, 3], [4, 0, 5], [6, 7, 8]]).unwrap();
        let misplaced = Heuristic::MisplacedTiles.evaluate(&board);
        let manhattan = Heuristic::ManhattanDistance.evaluate(&board);
        assert_eq!(misplaced, 4);
        assert_eq!(manhattan, 6);
        assert!(manhattan >= misplaced);
    }

    #[test]
    fn test_admissible_within_goal_radius() {
        // True distances by breadth-first expansion outward from the goal;
        // moves are reversible, so depth equals shortest path length.
        let mut true_distance: HashMap<Board, u32> = HashMap::new();
        let mut frontier = vec![Board::goal()];
        true_distance.insert(Board::goal(), 0);
        for depth in 1..=8u32 {
            let mut next = Vec::new();
            for board in frontier {
                for (_, neighbor) in board.neighbors() {
                    if !true_distance.contains_key(&neighbor) {
                        true_distance.insert(neighbor, depth);
                        next.push(neighbor);
                    }
                }
            }
            frontier = next;
        }

        for (board, distance) in &true_distance {
            assert!(Heuristic::MisplacedTiles.evaluate(board) <= *distance);
            assert!(Heuristic::ManhattanDistance.evaluate(board) <= *distance);
        }
    }
}
