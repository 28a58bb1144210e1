//! Arrow routing game
//!
//! A 5x5 board of arrows with one bull target. Tapping an arrow rotates it a
//! quarter turn clockwise; the level is won when following the arrows from
//! the top-left cell leads onto the target.
//!
//! This module must stay pure and deterministic:
//! - Boards are generated from the level id only
//! - Taps return a new board, the old one is left untouched
//! - No timer, storage or rendering dependencies

pub mod board;
pub mod path;
pub mod solver;

pub use board::{ArrowCell, Board, BoardError, Direction, Pos, apply_tap, level_seed};
pub use path::{Outcome, Trace, is_winning, trace};
pub use solver::{LevelReport, audit_levels, solve};
