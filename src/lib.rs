//! Exact solver library for the 3x3 sliding-tile (8-puzzle) problem.
//!
//! Given a scrambled board, the solver decides solvability up front via
//! the inversion-parity check and, when a solution exists, produces a
//! move sequence to the canonical goal arrangement. Three search
//! strategies share one engine: breadth-first, depth-first, and
//! cost-guided (A*) with a selectable admissible heuristic.
//!
//! ## Modules
//! - `board`: the 3x3 board value type, legal-move generation, and the
//!   solvability pre-check.
//! - `heuristic`: admissible estimates of remaining cost (misplaced
//!   tiles, Manhattan distance).
//! - `node`: search-tree records and path reconstruction.
//! - `solver`: the strategy-parameterized frontier loop.

pub mod board;
pub mod heuristic;
pub mod node;
pub mod solver;

// Re-export main types
pub use board::{Board, BoardError, Move};
pub use heuristic::Heuristic;
pub use node::{NodeArena, NodeId, SearchNode};
pub use solver::{solve, SolveResult, Strategy};
