//! Panel link supervision
//!
//! The panel pings periodically; the controller answers with Pong and
//! feeds this monitor. Time accumulates between pings, and after enough
//! missed ping windows in a row the link is declared lost. The panel
//! keeps its own clock running when the controller goes quiet, so the
//! only reaction required here is to report the loss and the recovery.

/// One missed ping window in milliseconds
pub const LINK_TIMEOUT_MS: u32 = 3000;

/// Ping windows missed in a row before the link counts as lost
pub const MAX_MISSED_PINGS: u8 = 3;

/// Link state transitions, reported exactly once per change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkEvent {
    /// No ping for [`MAX_MISSED_PINGS`] windows
    Lost,
    /// A ping arrived on a lost link
    Restored,
}

/// Missed-ping tracker consulted once per controller tick.
#[derive(Debug, Clone)]
pub struct LinkMonitor {
    /// Time since the last ping (ms)
    time_since_ping_ms: u32,
    /// Consecutive missed ping windows
    missed_pings: u8,
    /// Link currently considered lost
    lost: bool,
}

impl LinkMonitor {
    /// Create a monitor that considers the link alive until proven dead.
    pub const fn new() -> Self {
        Self {
            time_since_ping_ms: 0,
            missed_pings: 0,
            lost: false,
        }
    }

    /// Record a received ping.
    pub fn ping_received(&mut self) -> Option<LinkEvent> {
        self.time_since_ping_ms = 0;
        self.missed_pings = 0;
        if self.lost {
            self.lost = false;
            return Some(LinkEvent::Restored);
        }
        None
    }

    /// Advance time tracking.
    ///
    /// Returns [`LinkEvent::Lost`] on the update that crosses the missed
    /// ping threshold, and never again until the link is restored.
    pub fn update_time(&mut self, delta_ms: u32) -> Option<LinkEvent> {
        if self.lost {
            return None;
        }

        self.time_since_ping_ms = self.time_since_ping_ms.saturating_add(delta_ms);
        if self.time_since_ping_ms >= LINK_TIMEOUT_MS {
            self.time_since_ping_ms = 0;
            self.missed_pings = self.missed_pings.saturating_add(1);
            if self.missed_pings >= MAX_MISSED_PINGS {
                self.lost = true;
                return Some(LinkEvent::Lost);
            }
        }
        None
    }

    pub fn alive(&self) -> bool {
        !self.lost
    }
}

impl Default for LinkMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feed one-second updates, returning the first event
    fn run_seconds(monitor: &mut LinkMonitor, seconds: u32) -> Option<LinkEvent> {
        for _ in 0..seconds {
            if let Some(event) = monitor.update_time(1000) {
                return Some(event);
            }
        }
        None
    }

    #[test]
    fn test_new_link_is_alive() {
        let monitor = LinkMonitor::new();
        assert!(monitor.alive());
    }

    #[test]
    fn test_silence_loses_link_once() {
        let mut monitor = LinkMonitor::new();

        // Three full windows of silence
        let event = run_seconds(&mut monitor, 9);
        assert_eq!(event, Some(LinkEvent::Lost));
        assert!(!monitor.alive());

        // Further silence never re-fires the event
        assert_eq!(run_seconds(&mut monitor, 60), None);
    }

    #[test]
    fn test_ping_resets_the_window() {
        let mut monitor = LinkMonitor::new();

        for _ in 0..20 {
            assert_eq!(monitor.update_time(2500), None);
            assert_eq!(monitor.ping_received(), None);
        }
        assert!(monitor.alive());
    }

    #[test]
    fn test_ping_restores_a_lost_link() {
        let mut monitor = LinkMonitor::new();
        run_seconds(&mut monitor, 9);
        assert!(!monitor.alive());

        assert_eq!(monitor.ping_received(), Some(LinkEvent::Restored));
        assert!(monitor.alive());

        // Back to normal operation, loss can fire again
        assert_eq!(run_seconds(&mut monitor, 9), Some(LinkEvent::Lost));
    }

    #[test]
    fn test_single_missed_window_is_tolerated() {
        let mut monitor = LinkMonitor::new();

        // One window missed, then the panel comes back
        assert_eq!(run_seconds(&mut monitor, 3), None);
        assert!(monitor.alive());
        assert_eq!(monitor.ping_received(), None);
    }
}
