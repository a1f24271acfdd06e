//! Session state machine
//!
//! All display, indicator, and alert behavior is a function of the current
//! phase and the remaining time tracked here.
//!
//! Pausing keeps the interrupted phase: the machine stores the phase that is
//! actually counting down separately from the `running` flag, so resuming
//! from a break is never confused with resuming from work. The observable
//! [`Phase::Paused`] is derived, not stored.

use super::events::{SessionEvent, SettingError};

/// Observable lifecycle stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// No countdown configured; the grid shows READY (or the clock face)
    Idle,
    /// Work countdown running
    Work,
    /// Short break countdown running
    ShortBreak,
    /// Long break countdown running (after every Nth work session)
    LongBreak,
    /// Countdown frozen by the user
    Paused,
}

/// The phase a countdown belongs to. Pause clears `running`, never this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum ActivePhase {
    Idle,
    Work,
    ShortBreak,
    LongBreak,
}

/// Work duration bounds in minutes
pub const WORK_MINUTES_MIN: u16 = 1;
pub const WORK_MINUTES_MAX: u16 = 60;

/// Break duration bounds in minutes (short and long)
pub const BREAK_MINUTES_MIN: u16 = 1;
pub const BREAK_MINUTES_MAX: u16 = 30;

const DEFAULT_WORK_S: u32 = 25 * 60;
const DEFAULT_SHORT_BREAK_S: u32 = 5 * 60;
const DEFAULT_LONG_BREAK_S: u32 = 15 * 60;
const DEFAULT_SESSIONS_UNTIL_LONG_BREAK: u32 = 4;

/// The sole mutable entity of the Pomodoro overlay.
#[derive(Debug, Clone)]
pub struct Session {
    active: ActivePhase,
    running: bool,
    seconds_remaining: u32,
    completed_work_sessions: u32,
    work_s: u32,
    short_break_s: u32,
    long_break_s: u32,
    sessions_until_long_break: u32,
}

impl Session {
    /// Create an idle session with the default 25/5/15 minute durations.
    pub const fn new() -> Self {
        Self {
            active: ActivePhase::Idle,
            running: false,
            seconds_remaining: 0,
            completed_work_sessions: 0,
            work_s: DEFAULT_WORK_S,
            short_break_s: DEFAULT_SHORT_BREAK_S,
            long_break_s: DEFAULT_LONG_BREAK_S,
            sessions_until_long_break: DEFAULT_SESSIONS_UNTIL_LONG_BREAK,
        }
    }

    /// Current observable phase. `Paused` is derived from an interrupted
    /// active phase, so the work/break distinction survives a pause.
    pub fn phase(&self) -> Phase {
        match (self.active, self.running) {
            (ActivePhase::Idle, _) => Phase::Idle,
            (_, false) => Phase::Paused,
            (ActivePhase::Work, true) => Phase::Work,
            (ActivePhase::ShortBreak, true) => Phase::ShortBreak,
            (ActivePhase::LongBreak, true) => Phase::LongBreak,
        }
    }

    /// Whether ticks currently decrement the countdown
    pub fn running(&self) -> bool {
        self.running
    }

    /// Seconds left in the current countdown (0 when idle)
    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    /// Work sessions completed since power-on
    pub fn completed_work_sessions(&self) -> u32 {
        self.completed_work_sessions
    }

    /// Configured work duration in seconds
    pub fn work_duration_s(&self) -> u32 {
        self.work_s
    }

    /// Configured short break duration in seconds
    pub fn short_break_duration_s(&self) -> u32 {
        self.short_break_s
    }

    /// Configured long break duration in seconds
    pub fn long_break_duration_s(&self) -> u32 {
        self.long_break_s
    }

    /// Start a work countdown from any state.
    pub fn start_work(&mut self) -> SessionEvent {
        self.active = ActivePhase::Work;
        self.seconds_remaining = self.work_s;
        self.running = true;
        SessionEvent::WorkStarted
    }

    /// Start a break countdown from any state.
    pub fn start_break(&mut self, long: bool) -> SessionEvent {
        if long {
            self.active = ActivePhase::LongBreak;
            self.seconds_remaining = self.long_break_s;
        } else {
            self.active = ActivePhase::ShortBreak;
            self.seconds_remaining = self.short_break_s;
        }
        self.running = true;
        SessionEvent::BreakStarted { long }
    }

    /// Freeze the countdown. A no-op from Idle or when already paused, but
    /// `running` is forced off either way.
    pub fn pause(&mut self) -> Option<SessionEvent> {
        let was_counting = self.running && self.active != ActivePhase::Idle;
        self.running = false;
        was_counting.then_some(SessionEvent::Paused)
    }

    /// Resume the interrupted phase. A no-op unless a countdown is actually
    /// paused; resuming from Idle never starts a phantom countdown.
    pub fn resume(&mut self) -> Option<SessionEvent> {
        if self.running || self.active == ActivePhase::Idle {
            return None;
        }
        self.running = true;
        Some(SessionEvent::Resumed)
    }

    /// Return to Idle from any state.
    pub fn reset(&mut self) -> SessionEvent {
        self.active = ActivePhase::Idle;
        self.seconds_remaining = 0;
        self.running = false;
        SessionEvent::Reset
    }

    /// Advance the countdown by one second.
    ///
    /// No-op unless running. A countdown at zero completes on the *next*
    /// tick, so counting down from 1 takes two ticks to finish.
    pub fn tick(&mut self) -> Option<SessionEvent> {
        if !self.running {
            return None;
        }

        if self.seconds_remaining > 0 {
            self.seconds_remaining -= 1;
            return None;
        }

        match self.active {
            ActivePhase::Work => {
                self.completed_work_sessions += 1;
                let sessions = self.completed_work_sessions;
                let long_break = sessions % self.sessions_until_long_break == 0;
                self.start_break(long_break);
                Some(SessionEvent::WorkCompleted {
                    sessions,
                    long_break,
                })
            }
            ActivePhase::ShortBreak | ActivePhase::LongBreak => {
                self.reset();
                Some(SessionEvent::BreakCompleted)
            }
            // running is never set while idle, but hold the rule anyway
            ActivePhase::Idle => None,
        }
    }

    /// Set the work duration. Accepts 1-60 minutes.
    pub fn set_work_minutes(&mut self, minutes: u16) -> Result<(), SettingError> {
        check_bounds(minutes, WORK_MINUTES_MIN, WORK_MINUTES_MAX)?;
        self.work_s = u32::from(minutes) * 60;
        Ok(())
    }

    /// Set the short break duration. Accepts 1-30 minutes.
    pub fn set_short_break_minutes(&mut self, minutes: u16) -> Result<(), SettingError> {
        check_bounds(minutes, BREAK_MINUTES_MIN, BREAK_MINUTES_MAX)?;
        self.short_break_s = u32::from(minutes) * 60;
        Ok(())
    }

    /// Set the long break duration. Accepts 1-30 minutes.
    pub fn set_long_break_minutes(&mut self, minutes: u16) -> Result<(), SettingError> {
        check_bounds(minutes, BREAK_MINUTES_MIN, BREAK_MINUTES_MAX)?;
        self.long_break_s = u32::from(minutes) * 60;
        Ok(())
    }

    /// Set how many work sessions precede a long break. Must be at least 1.
    pub fn set_sessions_until_long_break(&mut self, count: u32) -> Result<(), SettingError> {
        if count == 0 {
            return Err(SettingError::BelowMinimum);
        }
        self.sessions_until_long_break = count;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn check_bounds(minutes: u16, min: u16, max: u16) -> Result<(), SettingError> {
    if minutes < min {
        Err(SettingError::BelowMinimum)
    } else if minutes > max {
        Err(SettingError::AboveMaximum)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new();
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.seconds_remaining(), 0);
        assert!(!session.running());
        assert_eq!(session.completed_work_sessions(), 0);
    }

    #[test]
    fn test_start_work_from_idle() {
        let mut session = Session::new();
        let event = session.start_work();

        assert_eq!(event, SessionEvent::WorkStarted);
        assert_eq!(session.phase(), Phase::Work);
        assert_eq!(session.seconds_remaining(), session.work_duration_s());
        assert!(session.running());
    }

    #[test]
    fn test_tick_decrements_while_running() {
        let mut session = Session::new();
        session.start_work();

        let before = session.seconds_remaining();
        assert_eq!(session.tick(), None);
        assert_eq!(session.seconds_remaining(), before - 1);
    }

    #[test]
    fn test_tick_is_noop_when_not_running() {
        let mut session = Session::new();
        session.start_work();
        session.pause();

        let frozen = session.seconds_remaining();
        assert_eq!(session.tick(), None);
        assert_eq!(session.seconds_remaining(), frozen);
    }

    #[test]
    fn test_completion_needs_two_ticks_from_one() {
        let mut session = Session::new();
        session.set_work_minutes(1).unwrap();
        session.start_work();

        // Burn down to one second left
        for _ in 0..59 {
            assert_eq!(session.tick(), None);
        }
        assert_eq!(session.seconds_remaining(), 1);

        // First tick reaches zero but stays in Work
        assert_eq!(session.tick(), None);
        assert_eq!(session.seconds_remaining(), 0);
        assert_eq!(session.phase(), Phase::Work);
        assert!(session.running());

        // Second tick fires the completion transition
        let event = session.tick();
        assert_eq!(
            event,
            Some(SessionEvent::WorkCompleted {
                sessions: 1,
                long_break: false
            })
        );
        assert_eq!(session.phase(), Phase::ShortBreak);
    }

    #[test]
    fn test_fourth_completion_takes_long_break() {
        let mut session = Session::new();

        for n in 1..=4u32 {
            session.start_work();
            let event = complete_current_phase(&mut session);
            match event {
                SessionEvent::WorkCompleted {
                    sessions,
                    long_break,
                } => {
                    assert_eq!(sessions, n);
                    assert_eq!(long_break, n == 4);
                }
                other => panic!("unexpected event {:?}", other),
            }
        }

        assert_eq!(session.phase(), Phase::LongBreak);
        assert_eq!(
            session.seconds_remaining(),
            session.long_break_duration_s()
        );
    }

    #[test]
    fn test_break_completion_returns_to_idle() {
        let mut session = Session::new();
        session.start_break(false);

        let event = complete_current_phase(&mut session);
        assert_eq!(event, SessionEvent::BreakCompleted);
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.seconds_remaining(), 0);
        assert!(!session.running());
    }

    #[test]
    fn test_pause_keeps_interrupted_phase() {
        let mut session = Session::new();
        session.start_break(true);

        assert_eq!(session.pause(), Some(SessionEvent::Paused));
        assert_eq!(session.phase(), Phase::Paused);

        // Resuming restores the break, not work
        assert_eq!(session.resume(), Some(SessionEvent::Resumed));
        assert_eq!(session.phase(), Phase::LongBreak);
    }

    #[test]
    fn test_pause_from_idle_is_noop() {
        let mut session = Session::new();
        assert_eq!(session.pause(), None);
        assert_eq!(session.phase(), Phase::Idle);
        assert!(!session.running());
    }

    #[test]
    fn test_double_pause_is_noop() {
        let mut session = Session::new();
        session.start_work();
        assert_eq!(session.pause(), Some(SessionEvent::Paused));
        assert_eq!(session.pause(), None);
        assert!(!session.running());
    }

    #[test]
    fn test_resume_from_idle_is_noop() {
        let mut session = Session::new();
        assert_eq!(session.resume(), None);
        assert_eq!(session.phase(), Phase::Idle);
        assert!(!session.running());
    }

    #[test]
    fn test_reset_from_every_state() {
        let mut session = Session::new();

        // From Work
        session.start_work();
        session.reset();
        assert_idle(&session);

        // From a break
        session.start_break(false);
        session.reset();
        assert_idle(&session);

        // From Paused
        session.start_work();
        session.pause();
        session.reset();
        assert_idle(&session);

        // From Idle
        session.reset();
        assert_idle(&session);
    }

    #[test]
    fn test_out_of_range_durations_rejected() {
        let mut session = Session::new();
        let work_before = session.work_duration_s();

        assert_eq!(
            session.set_work_minutes(61),
            Err(SettingError::AboveMaximum)
        );
        assert_eq!(session.set_work_minutes(0), Err(SettingError::BelowMinimum));
        assert_eq!(session.work_duration_s(), work_before);

        assert_eq!(
            session.set_short_break_minutes(31),
            Err(SettingError::AboveMaximum)
        );
        assert_eq!(
            session.set_long_break_minutes(0),
            Err(SettingError::BelowMinimum)
        );
        assert_eq!(
            session.set_sessions_until_long_break(0),
            Err(SettingError::BelowMinimum)
        );
    }

    #[test]
    fn test_duration_setters_apply_in_range() {
        let mut session = Session::new();
        session.set_work_minutes(50).unwrap();
        session.set_short_break_minutes(10).unwrap();
        session.set_long_break_minutes(30).unwrap();

        assert_eq!(session.work_duration_s(), 50 * 60);
        assert_eq!(session.short_break_duration_s(), 10 * 60);
        assert_eq!(session.long_break_duration_s(), 30 * 60);

        // New durations take effect on the next start
        session.start_work();
        assert_eq!(session.seconds_remaining(), 50 * 60);
    }

    #[test]
    fn test_full_work_session_scenario() {
        // 25 minutes of ticks land in a short break with the configured
        // break duration on the clock.
        let mut session = Session::new();
        session.start_work();
        assert_eq!(session.seconds_remaining(), 1500);

        for _ in 0..1500 {
            session.tick();
        }
        // Zero reached, completion pending on the next tick
        assert_eq!(session.seconds_remaining(), 0);
        assert_eq!(session.phase(), Phase::Work);

        let event = session.tick();
        assert!(matches!(event, Some(SessionEvent::WorkCompleted { .. })));
        assert_eq!(session.phase(), Phase::ShortBreak);
        assert_eq!(
            session.seconds_remaining(),
            session.short_break_duration_s()
        );
    }

    #[test]
    fn test_counter_never_decrements() {
        let mut session = Session::new();
        session.start_work();
        complete_current_phase(&mut session);
        assert_eq!(session.completed_work_sessions(), 1);

        // Reset and pause leave the counter alone
        session.reset();
        session.pause();
        assert_eq!(session.completed_work_sessions(), 1);
    }

    fn assert_idle(session: &Session) {
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.seconds_remaining(), 0);
        assert!(!session.running());
    }

    /// Tick until the current countdown fires its completion event.
    fn complete_current_phase(session: &mut Session) -> SessionEvent {
        for _ in 0..=session.seconds_remaining() {
            if let Some(event) = session.tick() {
                return event;
            }
        }
        panic!("countdown never completed");
    }
}
