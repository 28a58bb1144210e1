//! Tile-swap rules for the session machine
//!
//! First tap selects a cell, tapping it again deselects, tapping another cell
//! swaps the two pieces and clears the selection.

use crate::GameMode;
use crate::consts::TILE_COUNT;
use crate::tiles::{TileOrder, time_for_puzzle};

use super::Puzzle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TilePuzzle;

impl Puzzle for TilePuzzle {
    type Board = TileOrder;
    type Move = usize;

    const MODE: GameMode = GameMode::Tiles;
    const STARTS_RUNNING: bool = false;

    fn generate(level: u32) -> TileOrder {
        TileOrder::shuffled(level)
    }

    fn time_budget(level: u32) -> u32 {
        time_for_puzzle(level)
    }

    fn is_won(board: &TileOrder) -> bool {
        board.is_solved()
    }

    fn apply(board: &TileOrder, selected: &mut Option<usize>, cell: usize) -> Option<TileOrder> {
        if cell >= TILE_COUNT {
            return None;
        }
        match *selected {
            None => {
                *selected = Some(cell);
                None
            }
            Some(first) if first == cell => {
                *selected = None;
                None
            }
            Some(first) => {
                *selected = None;
                Some(board.swapped(first, cell))
            }
        }
    }
}
