//! Golden Bull Escape - puzzle core for the arrow routing and tile-swap games
//!
//! Core modules:
//! - `rng`: Bit-exact seeded generators (xorshift32, LCG)
//! - `routing`: 5x5 arrow board generation, win check, tap rotation, solver
//! - `tiles`: 3x3 tile shuffle, solved check, swap solver
//! - `session`: Per-attempt state machine and the owned one-second timer
//! - `controller`: Session controller wiring sessions, timer and progress
//! - `progress`: Unlocked level records on top of the key-value store
//! - `store`: Key-value persistence interface and backends
//! - `platform`: Browser/native platform abstraction
//! - `settings`, `share`, `catalog`: Settings flag, share texts, static content

pub mod catalog;
pub mod controller;
pub mod platform;
pub mod progress;
pub mod rng;
pub mod routing;
pub mod session;
pub mod settings;
pub mod share;
pub mod store;
pub mod tiles;

pub use controller::{GameController, RoutingController, SessionError, TileController};
pub use progress::ProgressStore;
pub use session::{Phase, Session, SessionEvent};
pub use settings::Settings;
pub use store::{KeyValueStore, MemoryStore, StoreError};

use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Routing board is GRID_SIZE x GRID_SIZE
    pub const GRID_SIZE: usize = 5;
    pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;
    /// Win simulation step bound (never reached thanks to the revisit check)
    pub const MAX_TRACE_STEPS: usize = GRID_CELLS + 10;

    /// Routing level seed = ROUTING_SEED_BASE + level * ROUTING_SEED_STEP
    pub const ROUTING_SEED_BASE: u32 = 12345;
    pub const ROUTING_SEED_STEP: u32 = 999;

    /// Tile puzzle is a 3x3 grid of image pieces
    pub const TILE_COUNT: usize = 9;

    pub const ROUTING_LEVELS: u32 = 15;
    pub const TILE_PUZZLES: u32 = 10;

    /// Flat time budget for every routing level (seconds)
    pub const ROUTING_TIME_LIMIT: u32 = 60;

    /// Storage keys
    pub const KEY_ROUTING_UNLOCK: &str = "gbull_unlocked_level_v1";
    pub const KEY_TILE_UNLOCK: &str = "gbull_puzzle_unlocked_v2";
    pub const KEY_TILE_UNLOCK_LEGACY: &str = "gbull_puzzle_unlocked_v1";
    pub const KEY_NOTIFICATIONS: &str = "gbull_notifications_on_v1";
    pub const KEY_GAME_RECORD: &str = "gbull_game_record_v1";
    pub const KEY_GAME_PROGRESS: &str = "gbull_game_progress_v1";
    pub const KEY_GAME_COINS: &str = "gbull_game_coins_v1";
}

/// Which mini-game a session, progress record or event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// 5x5 arrow rotation game
    Routing,
    /// 3x3 tile-swap picture puzzle
    Tiles,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Routing => "routing",
            GameMode::Tiles => "tiles",
        }
    }

    /// Number of levels/puzzles in this mode
    pub fn total(&self) -> u32 {
        match self {
            GameMode::Routing => consts::ROUTING_LEVELS,
            GameMode::Tiles => consts::TILE_PUZZLES,
        }
    }

    /// Storage key of the highest unlocked level
    pub fn unlock_key(&self) -> &'static str {
        match self {
            GameMode::Routing => consts::KEY_ROUTING_UNLOCK,
            GameMode::Tiles => consts::KEY_TILE_UNLOCK,
        }
    }

    /// True when `id` names an existing level of this mode
    pub fn contains(&self, id: u32) -> bool {
        (1..=self.total()).contains(&id)
    }
}

/// Format remaining seconds as `MM:SS`
pub fn format_clock(secs: i64) -> String {
    let s = secs.max(0);
    format!("{:02}:{:02}", s / 60, s % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(60), "01:00");
        assert_eq!(format_clock(9), "00:09");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(-3), "00:00");
        assert_eq!(format_clock(3725), "62:05");
    }

    #[test]
    fn test_mode_ranges() {
        assert!(GameMode::Routing.contains(1));
        assert!(GameMode::Routing.contains(15));
        assert!(!GameMode::Routing.contains(0));
        assert!(!GameMode::Routing.contains(16));
        assert!(GameMode::Tiles.contains(10));
        assert!(!GameMode::Tiles.contains(11));
        assert_ne!(GameMode::Routing.unlock_key(), GameMode::Tiles.unlock_key());
    }
}
