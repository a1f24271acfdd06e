//! Events emitted by session operations

/// Observable outcomes of session operations and ticks.
///
/// Every phase-affecting transition surfaces as an event so the firmware
/// can drive the status indicator and completion alert without polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionEvent {
    /// A work countdown started
    WorkStarted,
    /// A break countdown started
    BreakStarted {
        /// True for the long break after every Nth work session
        long: bool,
    },
    /// Countdown frozen by the user
    Paused,
    /// Countdown resumed into the interrupted phase
    Resumed,
    /// Session returned to idle
    Reset,
    /// A work phase counted down to zero; the follow-up break has started
    WorkCompleted {
        /// Total completed work sessions, including this one
        sessions: u32,
        /// True when the follow-up break is the long one
        long_break: bool,
    },
    /// A break counted down to zero; the session is idle again
    BreakCompleted,
}

impl SessionEvent {
    /// Completion events fire the one-shot alert pattern exactly once.
    pub fn is_completion(&self) -> bool {
        matches!(
            self,
            SessionEvent::WorkCompleted { .. } | SessionEvent::BreakCompleted
        )
    }
}

/// Rejection reasons for configuration setters.
///
/// An out-of-range value leaves the session untouched; it is never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingError {
    /// Value below the documented minimum
    BelowMinimum,
    /// Value above the documented maximum
    AboveMaximum,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_events() {
        assert!(SessionEvent::WorkCompleted {
            sessions: 1,
            long_break: false
        }
        .is_completion());
        assert!(SessionEvent::BreakCompleted.is_completion());
        assert!(!SessionEvent::WorkStarted.is_completion());
        assert!(!SessionEvent::Paused.is_completion());
    }
}
