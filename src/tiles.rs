//! Tile-swap picture puzzle
//!
//! Nine image pieces on a 3x3 grid. The board is a permutation: the value at
//! cell i names the piece shown there, and the picture is complete when every
//! piece sits at its own index.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TILE_COUNT;
use crate::rng::Lcg;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileError {
    #[error("expected 9 tiles, got {0}")]
    Length(usize),
    #[error("not a permutation of 0..9")]
    NotPermutation,
}

/// Piece order on the 3x3 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileOrder([u8; TILE_COUNT]);

impl Default for TileOrder {
    fn default() -> Self {
        Self::identity()
    }
}

impl TileOrder {
    /// The solved picture
    pub fn identity() -> Self {
        let mut order = [0u8; TILE_COUNT];
        for (i, v) in order.iter_mut().enumerate() {
            *v = i as u8;
        }
        Self(order)
    }

    /// Deterministic starting order for a puzzle; never the solved picture.
    pub fn shuffled(puzzle_id: u32) -> Self {
        let mut order = Self::identity();
        let mut rng = Lcg::new(puzzle_id);
        for i in (1..TILE_COUNT).rev() {
            let j = rng.next_below(i + 1);
            order.0.swap(i, j);
        }
        if order.is_solved() {
            order.0.swap(0, 1);
        }
        log::debug!("Shuffled tile puzzle {}: {:?}", puzzle_id, order.0);
        order
    }

    pub fn from_slice(values: &[u8]) -> Result<Self, TileError> {
        if values.len() != TILE_COUNT {
            return Err(TileError::Length(values.len()));
        }
        let mut seen = [false; TILE_COUNT];
        let mut order = [0u8; TILE_COUNT];
        for (slot, &v) in order.iter_mut().zip(values) {
            let v_idx = v as usize;
            if v_idx >= TILE_COUNT || seen[v_idx] {
                return Err(TileError::NotPermutation);
            }
            seen[v_idx] = true;
            *slot = v;
        }
        Ok(Self(order))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Piece shown at `cell`
    pub fn piece_at(&self, cell: usize) -> u8 {
        self.0[cell]
    }

    pub fn is_solved(&self) -> bool {
        self.0.iter().enumerate().all(|(i, &v)| v as usize == i)
    }

    /// Order with cells `a` and `b` exchanged
    pub fn swapped(&self, a: usize, b: usize) -> Self {
        let mut next = *self;
        next.0.swap(a, b);
        next
    }
}

/// Deterministic starting order for `puzzle_id`
pub fn shuffle(puzzle_id: u32) -> TileOrder {
    TileOrder::shuffled(puzzle_id)
}

/// True iff `order` is the identity permutation
pub fn is_solved(order: &TileOrder) -> bool {
    order.is_solved()
}

/// Fewest swaps that solve `order`, one per misplaced piece minus one per cycle.
pub fn solve_swaps(order: &TileOrder) -> Vec<(usize, usize)> {
    let mut work = *order;
    let mut swaps = Vec::new();
    for cell in 0..TILE_COUNT {
        // Send the piece at `cell` home until `cell` holds its own piece
        while work.piece_at(cell) as usize != cell {
            let home = work.piece_at(cell) as usize;
            swaps.push((cell, home));
            work = work.swapped(cell, home);
        }
    }
    swaps
}

/// Time budget in seconds for a tile puzzle
pub fn time_for_puzzle(puzzle_id: u32) -> u32 {
    match puzzle_id {
        1 => 30,
        2 => 20,
        3 => 15,
        _ => 10,
    }
}
