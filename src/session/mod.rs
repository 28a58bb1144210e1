//! Play session state machine
//!
//! One `Session` per attempt at a level. Both mini-games share the phase
//! machine; the board type, move type and win check come from [`Puzzle`].
//!
//! ```text
//! Idle --start--> Running --pause--> Paused --resume--> Running
//! Running --win--> Won      Running --time up--> Lost
//! Won | Lost | Paused --retry--> Running (fresh board, full time)
//! ```

pub mod arrow;
pub mod swap;
pub mod timer;

pub use arrow::RoutingPuzzle;
pub use swap::TilePuzzle;
pub use timer::SecondTimer;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::GameMode;

/// Current phase of an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Board shown, clock not started
    Idle,
    /// Clock running, taps accepted
    Running,
    /// Clock frozen
    Paused,
    Won,
    Lost,
}

impl Phase {
    /// Won or Lost
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

/// Outcome reported to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    Won { mode: GameMode, level: u32 },
    Lost { mode: GameMode, level: u32 },
}

/// A mini-game plugged into the session state machine
pub trait Puzzle {
    type Board: Clone + PartialEq + fmt::Debug;
    /// A player tap
    type Move: Copy + fmt::Debug;

    const MODE: GameMode;
    /// Routing levels run as soon as they open; tile puzzles wait for Start
    const STARTS_RUNNING: bool;

    fn generate(level: u32) -> Self::Board;
    fn time_budget(level: u32) -> u32;
    fn is_won(board: &Self::Board) -> bool;

    /// Apply a tap. Returns the new board when the tap changed it; may update
    /// the pending selection.
    fn apply(
        board: &Self::Board,
        selected: &mut Option<usize>,
        mv: Self::Move,
    ) -> Option<Self::Board>;
}

/// State of one attempt at a level
#[derive(Debug, Clone)]
pub struct Session<P: Puzzle> {
    level: u32,
    board: P::Board,
    remaining_secs: u32,
    phase: Phase,
    /// First tile chosen for a pending swap (tile game only)
    selected: Option<usize>,
}

impl<P: Puzzle> Session<P> {
    /// Open `level` with a fresh board and a full clock
    pub fn new(level: u32) -> Self {
        let phase = if P::STARTS_RUNNING {
            Phase::Running
        } else {
            Phase::Idle
        };
        Self {
            level,
            board: P::generate(level),
            remaining_secs: P::time_budget(level),
            phase,
            selected: None,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn board(&self) -> &P::Board {
        &self.board
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn mode(&self) -> GameMode {
        P::MODE
    }

    /// Idle -> Running. Returns false if the session was not idle.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.remaining_secs = P::time_budget(self.level);
        self.phase = Phase::Running;
        true
    }

    /// Running -> Paused
    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.phase = Phase::Paused;
        true
    }

    /// Paused -> Running, clock resumes from the frozen value
    pub fn resume(&mut self) -> bool {
        if self.phase != Phase::Paused {
            return false;
        }
        self.phase = Phase::Running;
        true
    }

    /// Won/Lost/Paused -> Running with a regenerated board and full clock
    pub fn retry(&mut self) -> bool {
        if !(self.phase.is_over() || self.phase == Phase::Paused) {
            return false;
        }
        self.board = P::generate(self.level);
        self.remaining_secs = P::time_budget(self.level);
        self.selected = None;
        self.phase = Phase::Running;
        true
    }

    /// One elapsed second. The decrement and the loss check happen together,
    /// so the clock never reads 0 while still Running.
    pub fn tick(&mut self) -> Option<SessionEvent> {
        if self.phase != Phase::Running {
            return None;
        }
        if self.remaining_secs <= 1 {
            self.remaining_secs = 0;
            self.phase = Phase::Lost;
            return Some(SessionEvent::Lost {
                mode: P::MODE,
                level: self.level,
            });
        }
        self.remaining_secs -= 1;
        None
    }

    /// Player tap. Ignored unless Running.
    pub fn tap(&mut self, mv: P::Move) -> Option<SessionEvent> {
        if self.phase != Phase::Running {
            return None;
        }
        let next = P::apply(&self.board, &mut self.selected, mv)?;
        self.board = next;
        if P::is_won(&self.board) {
            self.phase = Phase::Won;
            self.selected = None;
            return Some(SessionEvent::Won {
                mode: P::MODE,
                level: self.level,
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{Pos, solve};
    use crate::tiles::solve_swaps;

    #[test]
    fn test_routing_session_starts_running() {
        let s = Session::<RoutingPuzzle>::new(3);
        assert_eq!(s.phase(), Phase::Running);
        assert_eq!(s.remaining_secs(), 60);
        assert_eq!(s.mode(), GameMode::Routing);
    }

    #[test]
    fn test_tile_session_waits_for_start() {
        let mut s = Session::<TilePuzzle>::new(2);
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.tap(0), None);
        assert_eq!(s.selected(), None);
        assert_eq!(s.tick(), None);
        assert_eq!(s.remaining_secs(), 20);
        assert!(s.start());
        assert!(!s.start());
        assert_eq!(s.phase(), Phase::Running);
    }

    #[test]
    fn test_timer_runs_out() {
        let mut s = Session::<RoutingPuzzle>::new(1);
        let mut events = Vec::new();
        for _ in 0..60 {
            assert!(s.phase() == Phase::Running);
            events.extend(s.tick());
        }
        assert_eq!(s.phase(), Phase::Lost);
        assert_eq!(s.remaining_secs(), 0);
        assert_eq!(
            events,
            vec![SessionEvent::Lost {
                mode: GameMode::Routing,
                level: 1
            }]
        );
        // Further ticks do nothing
        assert_eq!(s.tick(), None);
        assert_eq!(s.remaining_secs(), 0);
    }

    #[test]
    fn test_clock_never_zero_while_running() {
        let mut s = Session::<TilePuzzle>::new(4);
        s.start();
        while s.phase() == Phase::Running {
            assert!(s.remaining_secs() > 0);
            s.tick();
        }
        assert_eq!(s.phase(), Phase::Lost);
    }

    #[test]
    fn test_pause_freezes_clock() {
        let mut s = Session::<RoutingPuzzle>::new(1);
        s.tick();
        assert!(s.pause());
        assert!(!s.pause());
        for _ in 0..5 {
            assert_eq!(s.tick(), None);
        }
        assert_eq!(s.remaining_secs(), 59);
        assert_eq!(s.tap(Pos::START), None);
        assert_eq!(s.board(), &RoutingPuzzle::generate(1));
        assert!(s.resume());
        s.tick();
        assert_eq!(s.remaining_secs(), 58);
    }

    #[test]
    fn test_routing_win_then_taps_ignored() {
        let mut s = Session::<RoutingPuzzle>::new(2);
        let taps = solve(s.board()).unwrap();
        let mut events = Vec::new();
        for t in &taps {
            events.extend(s.tap(*t));
        }
        assert_eq!(s.phase(), Phase::Won);
        assert_eq!(events.len(), 1);
        let won_board = s.board().clone();
        assert_eq!(s.tap(Pos::START), None);
        assert_eq!(s.board(), &won_board);
        assert_eq!(s.tick(), None);
    }

    #[test]
    fn test_retry_regenerates() {
        let mut s = Session::<RoutingPuzzle>::new(1);
        s.tap(Pos::START);
        assert!(!s.retry(), "retry only from paused or finished");
        for _ in 0..60 {
            s.tick();
        }
        assert_eq!(s.phase(), Phase::Lost);
        assert!(s.retry());
        assert_eq!(s.phase(), Phase::Running);
        assert_eq!(s.remaining_secs(), 60);
        assert_eq!(s.board(), &RoutingPuzzle::generate(1));
    }

    #[test]
    fn test_retry_from_won_and_paused() {
        let mut s = Session::<TilePuzzle>::new(3);
        s.start();
        for (a, b) in solve_swaps(s.board()) {
            s.tap(a);
            s.tap(b);
        }
        s.tick();
        assert_eq!(s.phase(), Phase::Won);
        assert!(s.retry());
        assert_eq!(s.phase(), Phase::Running);
        assert_eq!(s.board(), &TilePuzzle::generate(3));
        assert_eq!(s.remaining_secs(), 15);

        s.tick();
        s.tick();
        s.tap(4);
        assert!(s.pause());
        assert!(s.retry());
        assert_eq!(s.phase(), Phase::Running);
        assert_eq!(s.remaining_secs(), 15);
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn test_tile_win_via_swaps() {
        let mut s = Session::<TilePuzzle>::new(1);
        s.start();
        let mut last = None;
        for (a, b) in solve_swaps(s.board()) {
            assert_eq!(s.tap(a), None);
            assert_eq!(s.selected(), Some(a));
            last = s.tap(b);
        }
        assert_eq!(
            last,
            Some(SessionEvent::Won {
                mode: GameMode::Tiles,
                level: 1
            })
        );
        assert_eq!(s.phase(), Phase::Won);
        assert!(s.board().is_solved());
    }
}
