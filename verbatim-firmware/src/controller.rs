//! Main controller coordinating the pomodoro session and display output
//!
//! The controller is the central brain that:
//! - Applies console commands and touch actions to the session
//! - Advances the countdown on tick
//! - Decides what the panel shows (pomodoro overlay or the clock face)
//! - Derives the indicator LED color

use heapless::Vec;

use verbatim_core::compose::{compose, Directive, ThemeSelect, MAX_DIRECTIVES};
use verbatim_core::session::{Phase, Session, SessionEvent, SettingError};
use verbatim_protocol::{Command, TouchAction};

use crate::channels::IndicatorColor;

/// What the panel should currently display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelPlan {
    /// Hand the grid back to the panel's own clock face
    pub show_clock: bool,
    /// Word placements for the overlay (empty when `show_clock`)
    pub directives: Vec<Directive, MAX_DIRECTIVES>,
}

impl PanelPlan {
    /// Plan that shows the panel's own clock face.
    pub const fn clock() -> Self {
        Self {
            show_clock: true,
            directives: Vec::new(),
        }
    }
}

/// Controller state for coordinating subsystems
pub struct Controller {
    /// Pomodoro session state machine
    session: Session,
    /// Selected color theme
    theme: ThemeSelect,
    /// True while the overlay owns the grid
    overlay: bool,
}

impl Controller {
    pub const fn new() -> Self {
        Self {
            session: Session::new(),
            theme: ThemeSelect::new(),
            overlay: false,
        }
    }

    /// Apply a console command.
    ///
    /// `PS` takes over the grid; `PX` resets and hands it back to the
    /// clock. Setting commands with out-of-range values are rejected and
    /// leave the session untouched.
    pub fn handle_command(
        &mut self,
        command: Command,
    ) -> Result<Option<SessionEvent>, SettingError> {
        match command {
            Command::Start => {
                self.overlay = true;
                Ok(Some(self.session.start_work()))
            }
            Command::Pause => Ok(self.session.pause()),
            Command::Resume => Ok(self.session.resume()),
            Command::Reset => {
                self.overlay = false;
                Ok(Some(self.session.reset()))
            }
            Command::SetWorkMinutes(m) => {
                self.session.set_work_minutes(m)?;
                Ok(None)
            }
            Command::SetShortBreakMinutes(m) => {
                self.session.set_short_break_minutes(m)?;
                Ok(None)
            }
            Command::SetLongBreakMinutes(m) => {
                self.session.set_long_break_minutes(m)?;
                Ok(None)
            }
            Command::SetTheme(index) => {
                self.theme.set(index)?;
                Ok(None)
            }
        }
    }

    /// Apply a panel touch action.
    ///
    /// Touch reset clears the session but keeps the overlay up (READY);
    /// only the console `PX` returns the grid to the clock face.
    pub fn handle_touch(&mut self, action: TouchAction) -> Option<SessionEvent> {
        if !self.overlay {
            return None;
        }
        match action {
            TouchAction::Pause => self.session.pause(),
            TouchAction::PauseOrResume => {
                if self.session.phase() == Phase::Paused {
                    self.session.resume()
                } else {
                    self.session.pause()
                }
            }
            TouchAction::Reset => Some(self.session.reset()),
        }
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> Option<SessionEvent> {
        self.session.tick()
    }

    /// True while the countdown is running (display changes every second).
    pub fn counting(&self) -> bool {
        matches!(
            self.session.phase(),
            Phase::Work | Phase::ShortBreak | Phase::LongBreak
        )
    }

    pub fn overlay_active(&self) -> bool {
        self.overlay
    }

    /// Indicator LED color for the current phase.
    pub fn indicator_color(&self) -> IndicatorColor {
        match self.session.phase() {
            Phase::Work => IndicatorColor::Red,
            Phase::ShortBreak => IndicatorColor::Green,
            Phase::LongBreak => IndicatorColor::Blue,
            Phase::Idle | Phase::Paused => IndicatorColor::Off,
        }
    }

    /// Build the current panel plan.
    pub fn plan(&self) -> PanelPlan {
        if !self.overlay {
            return PanelPlan::clock();
        }
        PanelPlan {
            show_clock: false,
            directives: compose(&self.session, self.theme.current()),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
