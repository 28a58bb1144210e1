//! Unlock progress per game mode
//!
//! Each mode keeps one string-encoded integer: the highest level the player
//! may open (1-based). It only ever grows, by winning, until a reset.
//! Store failures never reach the player: reads fall back to 1 and failed
//! writes are logged and dropped.

use crate::consts::*;
use crate::store::{KeyValueStore, StoreError};
use crate::GameMode;

/// Progress record adapter over a key-value store
#[derive(Debug)]
pub struct ProgressStore<S> {
    store: S,
}

/// Parse a stored unlock value. Missing, malformed or < 1 reads as 1; values
/// above the mode total are capped.
fn parse_unlocked(raw: Option<&str>, total: u32) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|v| *v >= 1)
        .map_or(1, |v| v.min(total))
}

impl<S: KeyValueStore> ProgressStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Highest unlocked level for `mode` (1 when absent or unreadable)
    pub fn unlocked(&self, mode: GameMode) -> u32 {
        match self.store.get(mode.unlock_key()) {
            Ok(raw) => parse_unlocked(raw.as_deref(), mode.total()),
            Err(e) => {
                log::warn!("Could not read {} progress, using 1: {}", mode.as_str(), e);
                1
            }
        }
    }

    pub fn is_unlocked(&self, mode: GameMode, level: u32) -> bool {
        mode.contains(level) && level <= self.unlocked(mode)
    }

    /// Record a win: unlocked = max(current, completed + 1), capped at the
    /// mode total. Fire-and-forget; returns the value the player should see.
    pub fn unlock_next(&self, mode: GameMode, completed: u32) -> u32 {
        let current = self.unlocked(mode);
        let next = completed.saturating_add(1).min(mode.total());
        let unlocked = current.max(next);
        if unlocked != current {
            match self.store.set(mode.unlock_key(), &unlocked.to_string()) {
                Ok(()) => log::info!("Unlocked {} level {}", mode.as_str(), unlocked),
                Err(e) => log::warn!("Could not save {} progress: {}", mode.as_str(), e),
            }
        }
        unlocked
    }

    /// Put both modes back to level 1 and clear auxiliary records
    pub fn reset(&self) -> Result<(), StoreError> {
        reset_progress(&self.store)
    }
}

/// Reset routing and tile progress to 1 and remove the record/progress/coin
/// keys. Issued as one batch; a failure part way leaves earlier writes in place.
pub fn reset_progress<S: KeyValueStore + ?Sized>(store: &S) -> Result<(), StoreError> {
    store.set_many(&[(KEY_TILE_UNLOCK_LEGACY, "1"), (KEY_TILE_UNLOCK, "1")])?;
    store.set(KEY_ROUTING_UNLOCK, "1")?;
    store.remove_many(&[KEY_GAME_RECORD, KEY_GAME_PROGRESS, KEY_GAME_COINS])?;
    log::info!("Progress reset");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use proptest::prelude::*;

    #[test]
    fn test_defaults_to_one() {
        let progress = ProgressStore::new(MemoryStore::new());
        assert_eq!(progress.unlocked(GameMode::Routing), 1);
        assert_eq!(progress.unlocked(GameMode::Tiles), 1);
        assert!(progress.is_unlocked(GameMode::Routing, 1));
        assert!(!progress.is_unlocked(GameMode::Routing, 2));
    }

    #[test]
    fn test_malformed_values_read_as_one() {
        let store = MemoryStore::new();
        for raw in ["", "abc", "0", "-4", "NaN"] {
            store.set(KEY_ROUTING_UNLOCK, raw).unwrap();
            let progress = ProgressStore::new(&store);
            assert_eq!(progress.unlocked(GameMode::Routing), 1, "raw {raw:?}");
        }
        store.set(KEY_TILE_UNLOCK, "99").unwrap();
        assert_eq!(ProgressStore::new(&store).unlocked(GameMode::Tiles), 10);
    }

    #[test]
    fn test_unlock_next_is_monotonic_and_capped() {
        let store = MemoryStore::new();
        let progress = ProgressStore::new(&store);
        assert_eq!(progress.unlock_next(GameMode::Routing, 1), 2);
        assert_eq!(progress.unlock_next(GameMode::Routing, 5), 6);
        // Replaying an early level never lowers progress
        assert_eq!(progress.unlock_next(GameMode::Routing, 2), 6);
        assert_eq!(progress.unlock_next(GameMode::Routing, 15), 15);
        assert_eq!(store.get(KEY_ROUTING_UNLOCK).unwrap().as_deref(), Some("15"));
        // Modes are independent
        assert_eq!(progress.unlocked(GameMode::Tiles), 1);
    }

    #[test]
    fn test_store_failure_is_swallowed() {
        let store = MemoryStore::new();
        store.set_offline(true);
        let progress = ProgressStore::new(&store);
        assert_eq!(progress.unlocked(GameMode::Tiles), 1);
        assert_eq!(progress.unlock_next(GameMode::Tiles, 1), 2);
        store.set_offline(false);
        assert_eq!(progress.unlocked(GameMode::Tiles), 1);
    }

    #[test]
    fn test_reset_progress() {
        let store = MemoryStore::new();
        store.set(KEY_ROUTING_UNLOCK, "9").unwrap();
        store.set(KEY_TILE_UNLOCK, "4").unwrap();
        store.set(KEY_TILE_UNLOCK_LEGACY, "7").unwrap();
        store.set(KEY_GAME_COINS, "300").unwrap();
        store.set(KEY_GAME_RECORD, "12").unwrap();
        store.set(KEY_NOTIFICATIONS, "0").unwrap();

        let progress = ProgressStore::new(&store);
        progress.reset().unwrap();

        assert_eq!(progress.unlocked(GameMode::Routing), 1);
        assert_eq!(progress.unlocked(GameMode::Tiles), 1);
        assert_eq!(store.get(KEY_TILE_UNLOCK_LEGACY).unwrap().as_deref(), Some("1"));
        assert_eq!(store.get(KEY_GAME_COINS).unwrap(), None);
        assert_eq!(store.get(KEY_GAME_RECORD).unwrap(), None);
        // Settings survive a progress reset
        assert_eq!(store.get(KEY_NOTIFICATIONS).unwrap().as_deref(), Some("0"));
    }

    #[test]
    fn test_reset_reports_failure() {
        let store = MemoryStore::new();
        store.set_offline(true);
        assert!(reset_progress(&store).is_err());
    }

    proptest! {
        #[test]
        fn prop_unlock_never_decreases(wins in prop::collection::vec(1u32..=15, 0..30)) {
            let progress = ProgressStore::new(MemoryStore::new());
            let mut last = progress.unlocked(GameMode::Routing);
            for level in wins {
                let now = progress.unlock_next(GameMode::Routing, level);
                prop_assert!(now >= last);
                prop_assert!(now <= GameMode::Routing.total());
                prop_assert_eq!(now, progress.unlocked(GameMode::Routing));
                last = now;
            }
        }
    }
}
