//! Hex board state: grid cells, stone placement, and move enumeration

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Neighbor offsets on the rhombic hex grid, as (d_row, d_col)
pub const NEIGHBOR_OFFSETS: [(i32, i32); 6] = [
    (0, 1),
    (0, -1),
    (1, -1),
    (1, 0),
    (-1, 1),
    (-1, 0),
];

/// Smallest board on which connecting two opposite edges is a game
pub const MIN_BOARD_SIZE: usize = 2;

/// Errors surfaced by the engine
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HexError {
    #[error("board size must be at least 2, got {0}")]
    InvalidSize(usize),
    #[error("no empty cells left to play")]
    FullBoard,
}

// ============================================================================
// PLAYERS AND GOAL EDGES
// ============================================================================

/// Stone color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Blue = 0,
    Red = 1,
}

/// Which pair of opposite board edges a player must join to win
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoalAxis {
    /// Left column to right column
    Columns,
    /// Top row to bottom row
    Rows,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Blue => Player::Red,
            Player::Red => Player::Blue,
        }
    }

    /// Edge assignment, fixed here and nowhere else: Blue joins the left
    /// and right columns, Red joins the top and bottom rows.
    pub const fn goal_axis(self) -> GoalAxis {
        match self {
            Player::Blue => GoalAxis::Columns,
            Player::Red => GoalAxis::Rows,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

// ============================================================================
// COORDINATES
// ============================================================================

/// Cell coordinates, row-major
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// This cell's position along a goal axis
    pub fn along(self, axis: GoalAxis) -> usize {
        match axis {
            GoalAxis::Columns => self.col,
            GoalAxis::Rows => self.row,
        }
    }

    /// Manhattan distance to the board center, the move-ordering key
    pub fn center_distance(self, size: usize) -> usize {
        let mid = size / 2;
        self.row.abs_diff(mid) + self.col.abs_diff(mid)
    }

    /// Hex adjacency between two cells
    pub fn is_adjacent(self, other: Coord) -> bool {
        NEIGHBOR_OFFSETS.iter().any(|&(dr, dc)| {
            self.row as i64 + dr as i64 == other.row as i64
                && self.col as i64 + dc as i64 == other.col as i64
        })
    }

    /// In-bounds hex neighbors on a `size` x `size` board
    pub fn neighbors(self, size: usize) -> impl Iterator<Item = Coord> {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let row = self.row as i64 + dr as i64;
            let col = self.col as i64 + dc as i64;
            ((0..size as i64).contains(&row) && (0..size as i64).contains(&col))
                .then(|| Coord::new(row as usize, col as usize))
        })
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// N x N Hex board plus a derived per-player stone index.
///
/// The live game only ever places stones; `remove` exists for search
/// components that explore hypothetical moves and must restore the board
/// on the way back out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Player>>,
    positions: [FxHashSet<Coord>; 2],
}

impl Board {
    pub fn new(size: usize) -> Result<Self, HexError> {
        if size < MIN_BOARD_SIZE {
            return Err(HexError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
            positions: [FxHashSet::default(), FxHashSet::default()],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, cell: Coord) -> usize {
        cell.row * self.size + cell.col
    }

    /// Owner of a cell, `None` when empty
    pub fn get(&self, cell: Coord) -> Option<Player> {
        self.cells[self.idx(cell)]
    }

    /// Place a stone. Fails (no mutation) when the cell is occupied.
    pub fn place(&mut self, cell: Coord, player: Player) -> bool {
        let i = self.idx(cell);
        if self.cells[i].is_some() {
            return false;
        }
        self.cells[i] = Some(player);
        self.positions[player.index()].insert(cell);
        true
    }

    /// Undo a placement. Fails when the cell does not hold `player`'s stone.
    pub fn remove(&mut self, cell: Coord, player: Player) -> bool {
        let i = self.idx(cell);
        if self.cells[i] != Some(player) {
            return false;
        }
        self.cells[i] = None;
        self.positions[player.index()].remove(&cell);
        true
    }

    /// Empty cells in row-major order. Search relies on this order as its
    /// fallback move-ordering key.
    pub fn empty_cells(&self) -> Vec<Coord> {
        let mut result = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let cell = Coord::new(row, col);
                if self.get(cell).is_none() {
                    result.push(cell);
                }
            }
        }
        result
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Fraction of cells still empty, the game-phase signal
    pub fn empty_fraction(&self) -> f64 {
        self.empty_count() as f64 / (self.size * self.size) as f64
    }

    /// Cells holding `player`'s stones
    pub fn stones(&self, player: Player) -> &FxHashSet<Coord> {
        &self.positions[player.index()]
    }

    /// In-bounds hex neighbors of a cell
    pub fn neighbors(&self, cell: Coord) -> impl Iterator<Item = Coord> {
        cell.neighbors(self.size)
    }

    /// Copy the stones inside a `size`-wide square window into a fresh
    /// board, shifted so the window corner lands at (0, 0). The source
    /// board is untouched; callers guarantee `size >= 1` and in-range
    /// window bounds.
    pub(crate) fn window(&self, row_start: usize, col_start: usize, size: usize) -> Board {
        let mut reduced = Board {
            size,
            cells: vec![None; size * size],
            positions: [FxHashSet::default(), FxHashSet::default()],
        };
        for player in [Player::Blue, Player::Red] {
            for &cell in self.stones(player) {
                if cell.row < row_start || cell.col < col_start {
                    continue;
                }
                let shifted = Coord::new(cell.row - row_start, cell.col - col_start);
                if shifted.row < size && shifted.col < size {
                    reduced.place(shifted, player);
                }
            }
        }
        reduced
    }
}

// ============================================================================
// TESTS
// ============================================================================
