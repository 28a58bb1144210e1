//! Routing board types and level generation

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::rng::XorShift32;

/// Arrow direction, in clockwise order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Clockwise index (Up = 0)
    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    pub fn from_index(i: usize) -> Self {
        Self::ALL[i % 4]
    }

    /// One quarter turn clockwise
    pub fn rotated(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// (row, col) step
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// Clockwise quarter turns needed to face `target` (0..=3)
    pub fn turns_to(self, target: Direction) -> usize {
        (target.index() + 4 - self.index()) % 4
    }
}

/// A single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArrowCell {
    Arrow(Direction),
    /// The bull, exactly one per board
    Target,
}

impl ArrowCell {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            ArrowCell::Arrow(dir) => Some(*dir),
            ArrowCell::Target => None,
        }
    }
}

/// Grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    /// The fixed start cell
    pub const START: Pos = Pos { row: 0, col: 0 };

    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position for a row-major index
    pub fn from_index(i: usize) -> Self {
        Self {
            row: i / GRID_SIZE,
            col: i % GRID_SIZE,
        }
    }

    /// Row-major index
    pub fn index(self) -> usize {
        self.row * GRID_SIZE + self.col
    }

    pub fn in_bounds(self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Neighbor in `dir`, or None when it would leave the grid
    pub fn step(self, dir: Direction) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        let size = GRID_SIZE as i32;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Pos::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board must hold exactly one target, found {0}")]
    TargetCount(usize),
    #[error("the start cell cannot be the target")]
    TargetAtStart,
}

/// 5x5 routing board, row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [ArrowCell; GRID_CELLS],
    target: Pos,
}

/// Seed for a routing level
pub fn level_seed(level: u32) -> u32 {
    ROUTING_SEED_BASE.wrapping_add(level.wrapping_mul(ROUTING_SEED_STEP))
}

impl Board {
    /// Generate the board for a level.
    ///
    /// Draw order is fixed: target row, target column, one direction per cell
    /// in row-major order, then a fresh direction for the start cell. A target
    /// drawn onto the start cell is shifted one column right.
    pub fn generate(level: u32) -> Self {
        let mut rng = XorShift32::new(level_seed(level));

        let row = rng.next_below(GRID_SIZE);
        let mut col = rng.next_below(GRID_SIZE);
        if row == 0 && col == 0 {
            col = 1;
        }
        let target = Pos::new(row, col);

        let mut cells = [ArrowCell::Arrow(Direction::Up); GRID_CELLS];
        for cell in cells.iter_mut() {
            *cell = ArrowCell::Arrow(Direction::from_index(rng.next_below(4)));
        }
        cells[Pos::START.index()] = ArrowCell::Arrow(Direction::from_index(rng.next_below(4)));
        cells[target.index()] = ArrowCell::Target;

        log::debug!("Generated routing level {} (target at {:?})", level, target);
        Self { cells, target }
    }

    /// Build a board from raw cells
    pub fn from_cells(cells: [ArrowCell; GRID_CELLS]) -> Result<Self, BoardError> {
        let targets: Vec<usize> = cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == ArrowCell::Target)
            .map(|(i, _)| i)
            .collect();
        match targets.as_slice() {
            [0] => Err(BoardError::TargetAtStart),
            [i] => Ok(Self {
                cells,
                target: Pos::from_index(*i),
            }),
            other => Err(BoardError::TargetCount(other.len())),
        }
    }

    pub fn cells(&self) -> &[ArrowCell; GRID_CELLS] {
        &self.cells
    }

    pub fn cell(&self, pos: Pos) -> ArrowCell {
        self.cells[pos.index()]
    }

    pub fn target(&self) -> Pos {
        self.target
    }

    /// Board after tapping `pos`. Taps on the target or off the grid leave it unchanged.
    pub fn tapped(&self, pos: Pos) -> Board {
        let mut next = self.clone();
        if !pos.in_bounds() {
            return next;
        }
        if let ArrowCell::Arrow(dir) = self.cell(pos) {
            next.cells[pos.index()] = ArrowCell::Arrow(dir.rotated());
        }
        next
    }
}

/// Rotate the arrow at (row, col) one quarter turn clockwise
pub fn apply_tap(board: &Board, row: usize, col: usize) -> Board {
    board.tapped(Pos::new(row, col))
}
