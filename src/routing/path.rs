//! Win check: follow the arrows from the start cell

use serde::{Deserialize, Serialize};

use super::board::{ArrowCell, Board, Pos};
use crate::consts::*;

/// Why a trace stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    ReachedTarget,
    /// An arrow pointed off the grid
    LeftGrid,
    /// A cell was entered twice; arrows are static so this loops forever
    Cycle,
    StepLimit,
}

/// Route followed from the start cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    /// Distinct cells entered, in order (includes the target on a win)
    pub path: Vec<Pos>,
    pub outcome: Outcome,
}

impl Trace {
    pub fn is_win(&self) -> bool {
        self.outcome == Outcome::ReachedTarget
    }
}

/// Simulate the route from (0,0). Stateless: every call starts from scratch.
pub fn trace(board: &Board) -> Trace {
    let mut visited = [false; GRID_CELLS];
    let mut path = Vec::with_capacity(GRID_CELLS);
    let mut pos = Pos::START;

    for _ in 0..MAX_TRACE_STEPS {
        let id = pos.index();
        if visited[id] {
            return Trace {
                path,
                outcome: Outcome::Cycle,
            };
        }
        visited[id] = true;
        path.push(pos);

        let dir = match board.cell(pos) {
            ArrowCell::Target => {
                return Trace {
                    path,
                    outcome: Outcome::ReachedTarget,
                };
            }
            ArrowCell::Arrow(dir) => dir,
        };

        pos = match pos.step(dir) {
            Some(next) => next,
            None => {
                return Trace {
                    path,
                    outcome: Outcome::LeftGrid,
                };
            }
        };
    }

    Trace {
        path,
        outcome: Outcome::StepLimit,
    }
}

/// True when the arrows lead from (0,0) onto the target
pub fn is_winning(board: &Board) -> bool {
    trace(board).is_win()
}
