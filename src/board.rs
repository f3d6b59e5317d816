//! Board representation for the 3x3 sliding-tile puzzle.
//!
//! A `Board` is an immutable value type: applying a move never mutates a
//! board in place, it produces a new one with the blank swapped into the
//! neighboring cell. Boards compare and hash by their full arrangement,
//! which is what the search engine's visited sets key on.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Side length of the grid. The solver is fixed to 3x3.
pub const SIDE: usize = 3;

/// Total number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// Tile value that represents the blank cell.
pub const BLANK: u8 = 0;

/// Row-major goal arrangement: `1..8` in order with the blank last.
const GOAL_CELLS: [u8; CELLS] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

/// Direction the blank travels when a move is applied.
///
/// The order of `ALL` is the fixed expansion order: it determines which
/// neighbor is generated first and therefore the exploration order of the
/// uninformed strategies. It must stay stable across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All moves in the fixed expansion order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// (row, col) offset of the cell the blank moves into.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", name)
    }
}

/// Rejection reason for a board that is not a permutation of `0..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A cell holds a value outside `0..=8`.
    TileOutOfRange { value: u8 },
    /// A tile value appears more than once.
    DuplicateTile { value: u8 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::TileOutOfRange { value } => {
                write!(f, "tile value {} is outside 0..=8", value)
            }
            BoardError::DuplicateTile { value } => {
                write!(f, "tile value {} appears more than once", value)
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// One arrangement of the eight tiles and the blank, stored row-major.
///
/// Construction always validates, so every live `Board` is a permutation
/// of `0..=8` with exactly one blank. Serialization uses the nested 3x3
/// row format (`[[1,2,3],[4,0,5],[6,7,8]]`) and deserialization runs the
/// same validation as the constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[[u8; 3]; 3]", into = "[[u8; 3]; 3]")]
pub struct Board {
    cells: [u8; CELLS],
}

impl Board {
    /// Build a board from a flat row-major cell array.
    pub fn from_cells(cells: [u8; CELLS]) -> Result<Self, BoardError> {
        let mut seen = [false; CELLS];
        for &value in &cells {
            if value as usize >= CELLS {
                return Err(BoardError::TileOutOfRange { value });
            }
            if seen[value as usize] {
                return Err(BoardError::DuplicateTile { value });
            }
            seen[value as usize] = true;
        }
        Ok(Board { cells })
    }

    /// Build a board from nested rows, as read from JSON input.
    pub fn from_rows(rows: [[u8; SIDE]; SIDE]) -> Result<Self, BoardError> {
        let mut cells = [0u8; CELLS];
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                cells[r * SIDE + c] = value;
            }
        }
        Self::from_cells(cells)
    }

    /// The canonical goal arrangement.
    pub fn goal() -> Self {
        Board { cells: GOAL_CELLS }
    }

    /// Generate a random solvable board by shuffling until the parity
    /// check passes. The same seed always yields the same board.
    pub fn random_with_seed(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut cells = GOAL_CELLS;
        loop {
            cells.shuffle(&mut rng);
            let board = Board { cells };
            if board.is_solvable() {
                return board;
            }
        }
    }

    /// Tile value at (row, col).
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * SIDE + col]
    }

    /// (row, col) of the blank cell.
    pub fn blank_position(&self) -> (usize, usize) {
        let index = self
            .cells
            .iter()
            .position(|&tile| tile == BLANK)
            .expect("validated board always contains a blank");
        (index / SIDE, index % SIDE)
    }

    /// Whether this board is the goal arrangement.
    pub fn is_goal(&self) -> bool {
        self.cells == GOAL_CELLS
    }

    /// All boards one legal blank-swap away, paired with the move that
    /// produces them, in the fixed `Move::ALL` order.
    ///
    /// Returns 2 neighbors when the blank is in a corner, 3 on an edge,
    /// 4 in the center.
    pub fn neighbors(&self) -> SmallVec<[(Move, Board); 4]> {
        let (blank_row, blank_col) = self.blank_position();
        let mut out = SmallVec::new();
        for mv in Move::ALL {
            let (dr, dc) = mv.delta();
            let row = blank_row as i32 + dr;
            let col = blank_col as i32 + dc;
            if row < 0 || row >= SIDE as i32 || col < 0 || col >= SIDE as i32 {
                continue;
            }
            let mut cells = self.cells;
            cells.swap(
                blank_row * SIDE + blank_col,
                row as usize * SIDE + col as usize,
            );
            out.push((mv, Board { cells }));
        }
        out
    }

    /// Solvability pre-check via inversion parity.
    ///
    /// Reading the non-blank tiles row-major, the board is solvable iff
    /// the number of out-of-order pairs is even. On a 3x3 grid no blank
    /// move changes this parity, and the goal has zero inversions, so
    /// the check holds for every state reachable from a solvable start.
    pub fn is_solvable(&self) -> bool {
        self.inversions() % 2 == 0
    }

    fn inversions(&self) -> usize {
        let mut count = 0;
        for i in 0..CELLS {
            if self.cells[i] == BLANK {
                continue;
            }
            for j in (i + 1)..CELLS {
                if self.cells[j] != BLANK && self.cells[j] < self.cells[i] {
                    count += 1;
                }
            }
        }
        count
    }
}

impl TryFrom<[[u8; SIDE]; SIDE]> for Board {
    type Error = BoardError;

    fn try_from(rows: [[u8; SIDE]; SIDE]) -> Result<Self, Self::Error> {
        Board::from_rows(rows)
    }
}

impl From<Board> for [[u8; SIDE]; SIDE] {
    fn from(board: Board) -> Self {
        let mut rows = [[0u8; SIDE]; SIDE];
        for r in 0..SIDE {
            for c in 0..SIDE {
                rows[r][c] = board.get(r, c);
            }
        }
        rows
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..SIDE {
            for c in 0..SIDE {
                let tile = self.get(r, c);
                if tile == BLANK {
                    write!(f, " .")?;
                } else {
                    write!(f, "{:2}", tile)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
