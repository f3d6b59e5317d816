//! Search node bookkeeping and path reconstruction.
//!
//! Nodes live in an append-only arena and reference their parent by
//! index, so the parent links form a tree rooted at the start board and
//! "updating" a board's best node just means admitting a new arena entry.

use crate::board::{Board, Move};

/// Index of a node in its [`NodeArena`].
///
/// Ids are handed out in admission order, which doubles as the
/// insertion-order tiebreak for the priority frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NodeId(usize);

/// One discovered board with the link back to how it was reached.
#[derive(Debug, Clone, Copy)]
pub struct SearchNode {
    pub board: Board,
    /// Parent in the search tree; `None` only for the start board.
    pub parent: Option<NodeId>,
    /// Move that produced this board from the parent.
    pub mv: Option<Move>,
    /// Accumulated path cost from the start.
    pub g: u32,
    /// Heuristic estimate of remaining cost.
    pub h: u32,
}

impl SearchNode {
    pub fn root(board: Board, h: u32) -> Self {
        Self {
            board,
            parent: None,
            mv: None,
            g: 0,
            h,
        }
    }

    pub fn child(board: Board, parent: NodeId, mv: Move, g: u32, h: u32) -> Self {
        Self {
            board,
            parent: Some(parent),
            mv: Some(mv),
            g,
            h,
        }
    }

    /// Estimated total cost through this node.
    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}

/// Append-only store for every node admitted during one search call.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Boards along the path from the start board to `end`, inclusive.
    ///
    /// Walks parent links backward and reverses, so the result begins at
    /// the start board. Iterative on purpose: path length is bounded by
    /// the state-space diameter, not the call stack.
    pub fn reconstruct_path(&self, end: NodeId) -> Vec<Board> {
        let mut path = Vec::new();
        let mut current = Some(end);
        while let Some(id) = current {
            let node = self.get(id);
            path.push(node.board);
            current = node.parent;
        }
        path.reverse();
        path
    }

    /// Moves along the path from the start board to `end`, one per
    /// transition; empty when `end` is the start board itself.
    pub fn reconstruct_moves(&self, end: NodeId) -> Vec<Move> {
        let mut moves = Vec::new();
        let mut current = Some(end);
        while let Some(id) = current {
            let node = self.get(id);
            if let Some(mv) = node.mv {
                moves.push(mv);
            }
            current = node.parent;
        }
        moves.reverse();
        moves
    }
}
