//! Minimal-tap solver and level audit
//!
//! Every non-target cell is an arrow that can face any direction, so a route
//! always exists. The cost of a route is the number of quarter turns needed
//! to point each cell on it at the next one; Dijkstra over the 25 cells finds
//! the cheapest.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::board::{ArrowCell, Board, Direction, Pos};
use super::path::is_winning;
use crate::consts::*;

/// Cheapest tap sequence that makes `board` winning.
///
/// Returns an empty sequence for a board that already wins, and None only if
/// the target cannot be reached at all.
pub fn solve(board: &Board) -> Option<Vec<Pos>> {
    if is_winning(board) {
        return Some(Vec::new());
    }

    let goal = board.target().index();
    let mut dist = [usize::MAX; GRID_CELLS];
    // (previous cell, direction taken out of it)
    let mut prev: [Option<(usize, Direction)>; GRID_CELLS] = [None; GRID_CELLS];
    let mut heap = BinaryHeap::new();

    dist[Pos::START.index()] = 0;
    heap.push(Reverse((0usize, Pos::START.index())));

    while let Some(Reverse((cost, id))) = heap.pop() {
        if cost > dist[id] {
            continue;
        }
        if id == goal {
            break;
        }
        let pos = Pos::from_index(id);
        let ArrowCell::Arrow(current) = board.cell(pos) else {
            continue;
        };
        for dir in Direction::ALL {
            let Some(next) = pos.step(dir) else {
                continue;
            };
            let next_cost = cost + current.turns_to(dir);
            if next_cost < dist[next.index()] {
                dist[next.index()] = next_cost;
                prev[next.index()] = Some((id, dir));
                heap.push(Reverse((next_cost, next.index())));
            }
        }
    }

    if dist[goal] == usize::MAX {
        return None;
    }

    // Walk back from the target collecting (cell, wanted direction)
    let mut route = Vec::new();
    let mut at = goal;
    while let Some((from, dir)) = prev[at] {
        route.push((Pos::from_index(from), dir));
        at = from;
    }
    route.reverse();

    let mut taps = Vec::with_capacity(dist[goal]);
    for (pos, wanted) in route {
        if let ArrowCell::Arrow(current) = board.cell(pos) {
            taps.extend(std::iter::repeat_n(pos, current.turns_to(wanted)));
        }
    }
    Some(taps)
}

/// Per-level summary from [`audit_levels`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelReport {
    pub level: u32,
    pub target: Pos,
    /// Fewest taps that win the level
    pub min_taps: Option<usize>,
    /// The generated board already routes to the target before any tap
    pub won_at_start: bool,
}

/// Check every routing level. Levels that are already won when generated are
/// reported and logged; the generator is left as is.
pub fn audit_levels() -> Vec<LevelReport> {
    (1..=ROUTING_LEVELS)
        .map(|level| {
            let board = Board::generate(level);
            let won_at_start = is_winning(&board);
            let min_taps = solve(&board).map(|taps| taps.len());
            if won_at_start {
                log::warn!("Routing level {} is already solved when generated", level);
            }
            match min_taps {
                Some(n) => log::debug!("Routing level {}: {} taps minimum", level, n),
                None => log::warn!("Routing level {} has no route to the target", level),
            }
            LevelReport {
                level,
                target: board.target(),
                min_taps,
                won_at_start,
            }
        })
        .collect()
}
