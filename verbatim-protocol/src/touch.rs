//! Touch zone mapping
//!
//! The panel face is split into three vertical thirds. Touch handling is
//! deliberately coarse so it works through a glass bezel.

/// Panel touch surface width in raw touch units
pub const PANEL_WIDTH: u16 = 320;
/// Panel touch surface height in raw touch units
pub const PANEL_HEIGHT: u16 = 240;

/// Control action mapped from a touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchAction {
    /// Left third: pause the countdown
    Pause,
    /// Middle third: pause if running, resume if paused
    PauseOrResume,
    /// Right third: reset the session
    Reset,
}

/// Map a touch coordinate to a control action.
///
/// Coordinates at or beyond the panel edge are ignored rather than clamped
/// so controller noise cannot fire an action.
pub fn action_for(x: u16, y: u16) -> Option<TouchAction> {
    if x >= PANEL_WIDTH || y >= PANEL_HEIGHT {
        return None;
    }
    if x < PANEL_WIDTH / 3 {
        Some(TouchAction::Pause)
    } else if x < 2 * PANEL_WIDTH / 3 {
        Some(TouchAction::PauseOrResume)
    } else {
        Some(TouchAction::Reset)
    }
}
