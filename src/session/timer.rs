//! One-second countdown timer
//!
//! The timer does not run on its own. The owner feeds it elapsed wall time
//! and gets back the number of whole seconds that passed while it was
//! running, the same fixed-step accumulator a frame loop uses.

use std::time::Duration;

/// Cancellable second ticker, owned by the session controller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecondTimer {
    running: bool,
    /// Time accumulated towards the next tick
    carry: Duration,
}

impl SecondTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)start from a clean second
    pub fn start(&mut self) {
        self.running = true;
        self.carry = Duration::ZERO;
    }

    /// Stop and drop any partial second. Stopping a stopped timer is a no-op.
    pub fn stop(&mut self) {
        self.running = false;
        self.carry = Duration::ZERO;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Feed elapsed time, returns whole seconds completed (saturating)
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.running {
            return 0;
        }
        let total = self.carry.saturating_add(elapsed);
        self.carry = Duration::new(0, total.subsec_nanos());
        u32::try_from(total.as_secs()).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_timer_never_ticks() {
        let mut t = SecondTimer::new();
        assert_eq!(t.advance(Duration::from_secs(5)), 0);
        assert!(!t.is_running());
    }

    #[test]
    fn test_accumulates_partial_seconds() {
        let mut t = SecondTimer::new();
        t.start();
        assert_eq!(t.advance(Duration::from_millis(400)), 0);
        assert_eq!(t.advance(Duration::from_millis(700)), 1);
        assert_eq!(t.advance(Duration::from_millis(900)), 1);
        assert_eq!(t.advance(Duration::from_millis(2500)), 2);
    }

    #[test]
    fn test_long_slices() {
        let mut t = SecondTimer::new();
        t.start();
        assert_eq!(t.advance(Duration::from_millis(3_600_500)), 3600);
        assert_eq!(t.advance(Duration::from_millis(500)), 1);
        assert_eq!(t.advance(Duration::MAX), u32::MAX);
        assert_eq!(t.advance(Duration::MAX), u32::MAX);
        assert!(t.is_running());
    }

    #[test]
    fn test_stop_is_idempotent_and_drops_carry() {
        let mut t = SecondTimer::new();
        t.start();
        t.advance(Duration::from_millis(900));
        t.stop();
        t.stop();
        assert!(!t.is_running());
        t.start();
        assert_eq!(t.advance(Duration::from_millis(200)), 0);
    }
}
