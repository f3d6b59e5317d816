//! Strategy-driven search engine over the sliding-tile state space.
//!
//! One loop shape serves all three strategies; only the frontier
//! discipline and the deduplication rule differ. Uninformed strategies
//! deduplicate at enqueue time, so each board enters the frontier at
//! most once. Cost-guided search relaxes instead: a board may be
//! enqueued again whenever a strictly cheaper path to it is found, and
//! stale frontier entries are skipped (uncounted) at pop time.

use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Move};
use crate::heuristic::Heuristic;
use crate::node::{NodeArena, NodeId, SearchNode};

/// Frontier ordering policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// First-in-first-out frontier; finds shortest solutions.
    BreadthFirst,
    /// Last-in-first-out frontier; finds a solution, not the shortest.
    DepthFirst,
    /// Ascending `g + h` frontier (A*); finds shortest solutions when
    /// the heuristic is admissible.
    CostGuided,
}

/// Outcome of one [`solve`] call.
///
/// Every case of the contract is a value here, not an error: an
/// unsolvable start has `solvable == false` and no path, a start that is
/// already the goal has a one-element path and zero expansions, and
/// frontier exhaustion leaves `path` empty with the counter intact.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Parity verdict from the pre-search solvability check.
    pub solvable: bool,
    /// Boards from start to goal inclusive, when a solution was found.
    pub path: Option<Vec<Board>>,
    /// Blank-travel direction for each transition on the path.
    pub moves: Option<Vec<Move>>,
    /// Number of states popped and expanded (stale pops excluded).
    pub states_expanded: usize,
}

impl SolveResult {
    /// Path length minus one, when a path exists.
    pub fn move_count(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len() - 1)
    }

    fn solved(arena: &NodeArena, goal: NodeId, states_expanded: usize) -> Self {
        SolveResult {
            solvable: true,
            path: Some(arena.reconstruct_path(goal)),
            moves: Some(arena.reconstruct_moves(goal)),
            states_expanded,
        }
    }
}

/// Priority-frontier entry. Ordering is inverted so the max-heap pops
/// the entry with the lowest `f`, breaking ties by lowest `h`, then by
/// earliest admission (node ids are handed out in admission order).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapEntry {
    f: u32,
    h: u32,
    id: NodeId,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordered multiset of pending nodes; the tagged variant is the whole
/// strategy polymorphism.
enum Frontier {
    Fifo(VecDeque<NodeId>),
    Lifo(Vec<NodeId>),
    Priority(BinaryHeap<HeapEntry>),
}

impl Frontier {
    fn for_strategy(strategy: Strategy) -> Self {
        match strategy {
            Strategy::BreadthFirst => Frontier::Fifo(VecDeque::new()),
            Strategy::DepthFirst => Frontier::Lifo(Vec::new()),
            Strategy::CostGuided => Frontier::Priority(BinaryHeap::new()),
        }
    }

    fn push(&mut self, node: &SearchNode, id: NodeId) {
        match self {
            Frontier::Fifo(queue) => queue.push_back(id),
            Frontier::Lifo(stack) => stack.push(id),
            Frontier::Priority(heap) => heap.push(HeapEntry {
                f: node.f(),
                h: node.h,
                id,
            }),
        }
    }

    fn pop(&mut self) -> Option<NodeId> {
        match self {
            Frontier::Fifo(queue) => queue.pop_front(),
            Frontier::Lifo(stack) => stack.pop(),
            Frontier::Priority(heap) => heap.pop().map(|entry| entry.id),
        }
    }
}

/// Search for a move sequence from `start` to the goal arrangement.
///
/// The solvability verdict is decided up front by the parity check, so
/// an unsolvable scramble returns immediately with zero expansions. The
/// heuristic only matters for [`Strategy::CostGuided`]; the uninformed
/// strategies treat every estimate as zero.
///
/// Deterministic: identical arguments produce identical paths and
/// identical expansion counts.
pub fn solve(start: &Board, strategy: Strategy, heuristic: Heuristic) -> SolveResult {
    if !start.is_solvable() {
        return SolveResult {
            solvable: false,
            path: None,
            moves: None,
            states_expanded: 0,
        };
    }

    if start.is_goal() {
        return SolveResult {
            solvable: true,
            path: Some(vec![*start]),
            moves: Some(Vec::new()),
            states_expanded: 0,
        };
    }

    let cost_aware = strategy == Strategy::CostGuided;
    let heuristic = if cost_aware { heuristic } else { Heuristic::None };

    let mut arena = NodeArena::new();
    let mut frontier = Frontier::for_strategy(strategy);
    // Boards finally expanded (cost-guided) or discovered (uninformed).
    let mut visited: HashSet<Board> = HashSet::new();
    // Best known path cost per board, cost-guided only.
    let mut best_g: HashMap<Board, u32> = HashMap::new();

    let root = arena.push(SearchNode::root(*start, heuristic.evaluate(start)));
    frontier.push(arena.get(root), root);
    if cost_aware {
        best_g.insert(*start, 0);
    } else {
        visited.insert(*start);
    }

    let mut states_expanded = 0usize;
    while let Some(id) = frontier.pop() {
        let node = *arena.get(id);

        // Lazy deletion: a board can sit in the priority frontier more
        // than once; only its first (cheapest) pop is expanded.
        if cost_aware && !visited.insert(node.board) {
            continue;
        }

        states_expanded += 1;

        if node.board.is_goal() {
            return SolveResult::solved(&arena, id, states_expanded);
        }

        let mut expansion = node.board.neighbors();
        if strategy == Strategy::DepthFirst {
            // Stack semantics invert pop order; reversing here keeps the
            // apparent direction priority in line with breadth-first.
            expansion.reverse();
        }

        for (mv, board) in expansion {
            if cost_aware {
                if visited.contains(&board) {
                    continue;
                }
                let tentative = node.g + 1;
                if best_g.get(&board).is_some_and(|&g| tentative >= g) {
                    continue;
                }
                best_g.insert(board, tentative);
                let child = arena.push(SearchNode::child(
                    board,
                    id,
                    mv,
                    tentative,
                    heuristic.evaluate(&board),
                ));
                frontier.push(arena.get(child), child);
            } else if visited.insert(board) {
                let child = arena.push(SearchNode::child(board, id, mv, node.g + 1, 0));
                frontier.push(arena.get(child), child);
            }
        }
    }

    // Exhaustion after a passed solvability check indicates a defect in
    // neighbor generation or deduplication; still a defined outcome.
    debug_assert!(false, "frontier exhausted on a solvable board");
    SolveResult {
        solvable: true,
        path: None,
        moves: None,
        states_expanded,
    }
}
