//! Routing game rules for the session machine

use crate::GameMode;
use crate::consts::ROUTING_TIME_LIMIT;
use crate::routing::{ArrowCell, Board, Pos, is_winning};

use super::Puzzle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoutingPuzzle;

impl Puzzle for RoutingPuzzle {
    type Board = Board;
    type Move = Pos;

    const MODE: GameMode = GameMode::Routing;
    const STARTS_RUNNING: bool = true;

    fn generate(level: u32) -> Board {
        Board::generate(level)
    }

    fn time_budget(_level: u32) -> u32 {
        ROUTING_TIME_LIMIT
    }

    fn is_won(board: &Board) -> bool {
        is_winning(board)
    }

    fn apply(board: &Board, _selected: &mut Option<usize>, pos: Pos) -> Option<Board> {
        if !pos.in_bounds() {
            return None;
        }
        match board.cell(pos) {
            ArrowCell::Target => None,
            ArrowCell::Arrow(_) => Some(board.tapped(pos)),
        }
    }
}
