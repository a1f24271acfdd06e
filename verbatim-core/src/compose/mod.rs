//! Display composition
//!
//! Turns session state into placement directives for the word grid. The
//! grid is addressed as a flat run of character cells; one directive colors
//! one word into a fixed region. A composition is delivered to the panel as
//! a single atomic burst before the next tick's output is requested.

pub mod theme;

pub use theme::{Rgb, Theme, ThemeSelect, THEMES};

use heapless::{String, Vec};

use crate::numwords::{words, MAX_WORD_LEN};
use crate::session::{Phase, Session};

/// A fixed run of grid cells a word is placed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Region {
    /// First cell index
    pub start: u8,
    /// Last cell index, inclusive
    pub end: u8,
}

impl Region {
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }
}

// Grid layout (cell indices) of the production panel
pub const MINUTES_VALUE: Region = Region::new(0, 15);
pub const MINUTES_LABEL: Region = Region::new(20, 26);
pub const SECONDS_VALUE: Region = Region::new(32, 47);
pub const SECONDS_LABEL: Region = Region::new(52, 58);
pub const SESSION_LABEL: Region = Region::new(64, 80);
pub const READY_WORD: Region = Region::new(32, 36);

/// Upper bound on directives in one composition: two values, two unit
/// labels, one session label.
pub const MAX_DIRECTIVES: usize = 5;

/// One word placement for the rendering sink.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Directive {
    pub text: String<MAX_WORD_LEN>,
    pub region: Region,
    pub color: Rgb,
}

/// Session label text for each phase
pub fn label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "IDLE",
        Phase::Work => "FOCUS",
        Phase::ShortBreak => "SHORT BREAK",
        Phase::LongBreak => "LONG BREAK",
        Phase::Paused => "PAUSED",
    }
}

/// (countdown color, label color) for each phase under the given theme.
/// Paused overrides the theme so a frozen countdown is unmistakable.
pub fn palette(phase: Phase, theme: &Theme) -> (Rgb, Rgb) {
    match phase {
        Phase::Work => (theme.work, theme.label),
        Phase::ShortBreak | Phase::LongBreak => (theme.brk, theme.label),
        Phase::Paused => (theme::YELLOW, theme::GOLD),
        Phase::Idle => (theme::WHITE, theme.label),
    }
}

/// Compose the countdown display for the current session state.
///
/// Idle emits a single READY directive. Any other phase (including Paused,
/// which shows the frozen countdown) emits the minute and second words plus
/// their unit labels and the session label. A zero value is omitted
/// entirely; its unit label still renders.
pub fn compose(session: &Session, theme: &Theme) -> Vec<Directive, MAX_DIRECTIVES> {
    let mut out = Vec::new();
    let phase = session.phase();

    if phase == Phase::Idle {
        place(&mut out, "READY", READY_WORD, theme::WHITE);
        return out;
    }

    let (time_color, label_color) = palette(phase, theme);
    let minutes = words(session.seconds_remaining() / 60);
    let seconds = words(session.seconds_remaining() % 60);

    if !minutes.is_empty() {
        place(&mut out, &minutes, MINUTES_VALUE, time_color);
    }
    place(&mut out, "MINUTES", MINUTES_LABEL, label_color);

    if !seconds.is_empty() {
        place(&mut out, &seconds, SECONDS_VALUE, time_color);
    }
    place(&mut out, "SECONDS", SECONDS_LABEL, label_color);

    place(&mut out, label(phase), SESSION_LABEL, label_color);
    out
}

fn place(out: &mut Vec<Directive, MAX_DIRECTIVES>, text: &str, region: Region, color: Rgb) {
    let mut owned: String<MAX_WORD_LEN> = String::new();
    let _ = owned.push_str(text);
    // Capacity is sized for a full composition; a push never fails here
    let _ = out.push(Directive {
        text: owned,
        region,
        color,
    });
}
