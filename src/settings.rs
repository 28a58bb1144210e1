//! Player settings
//!
//! Persisted as individual flags in the key-value store, separate from
//! unlock progress.

use serde::{Deserialize, Serialize};

use crate::consts::KEY_NOTIFICATIONS;
use crate::progress::reset_progress;
use crate::store::{KeyValueStore, StoreError};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Reminder notifications
    pub notifications: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications: true,
        }
    }
}

impl Settings {
    /// Load settings; anything missing or unreadable keeps its default
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let mut settings = Self::default();
        match store.get(KEY_NOTIFICATIONS) {
            Ok(Some(raw)) => {
                settings.notifications = raw == "1";
                log::info!("Loaded settings");
            }
            Ok(None) => log::info!("Using default settings"),
            Err(e) => log::warn!("Could not read settings, using defaults: {}", e),
        }
        settings
    }

    /// Save settings; failures are logged and ignored
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &S) {
        let value = if self.notifications { "1" } else { "0" };
        match store.set(KEY_NOTIFICATIONS, value) {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Could not save settings: {}", e),
        }
    }

    /// Flip notifications and persist the new value
    pub fn set_notifications<S: KeyValueStore + ?Sized>(&mut self, on: bool, store: &S) {
        self.notifications = on;
        self.save(store);
    }

    /// Settings screen "reset progress" action
    pub fn reset_progress<S: KeyValueStore + ?Sized>(store: &S) -> Result<(), StoreError> {
        reset_progress(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_notifications_default_on() {
        let store = MemoryStore::new();
        assert!(Settings::load(&store).notifications);
    }

    #[test]
    fn test_toggle_persists() {
        let store = MemoryStore::new();
        let mut settings = Settings::load(&store);
        settings.set_notifications(false, &store);
        assert_eq!(store.get(KEY_NOTIFICATIONS).unwrap().as_deref(), Some("0"));
        assert!(!Settings::load(&store).notifications);
        settings.set_notifications(true, &store);
        assert!(Settings::load(&store).notifications);
    }

    #[test]
    fn test_unexpected_value_reads_off() {
        let store = MemoryStore::new();
        store.set(KEY_NOTIFICATIONS, "yes").unwrap();
        assert!(!Settings::load(&store).notifications);
    }

    #[test]
    fn test_offline_store_keeps_defaults() {
        let store = MemoryStore::new();
        store.set_offline(true);
        let mut settings = Settings::load(&store);
        assert!(settings.notifications);
        // Toggle still applies in memory
        settings.set_notifications(false, &store);
        assert!(!settings.notifications);
    }
}
