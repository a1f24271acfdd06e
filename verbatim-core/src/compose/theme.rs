//! Color themes for the countdown display

use crate::session::SettingError;

/// 24-bit grid color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a 0xRRGGBB literal
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

/// READY word when the timer is idle
pub const WHITE: Rgb = Rgb::from_hex(0xFFFFFF);
/// Frozen countdown digits while paused
pub const YELLOW: Rgb = Rgb::from_hex(0xFFFF00);
/// Labels while paused
pub const GOLD: Rgb = Rgb::from_hex(0xFFD700);

/// A (work, break, label) color triple selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Theme {
    /// Countdown color during work
    pub work: Rgb,
    /// Countdown color during breaks (short and long)
    pub brk: Rgb,
    /// Color for the MINUTES/SECONDS and session labels
    pub label: Rgb,
}

/// Fixed theme table. Index 0 is the classic tomato scheme.
pub const THEMES: [Theme; 4] = [
    Theme {
        work: Rgb::from_hex(0xFF0000),
        brk: Rgb::from_hex(0x00FF00),
        label: Rgb::from_hex(0xFFFF00),
    },
    Theme {
        work: Rgb::from_hex(0xFF4500),
        brk: Rgb::from_hex(0x00CED1),
        label: Rgb::from_hex(0xFFD700),
    },
    Theme {
        work: Rgb::from_hex(0xDC143C),
        brk: Rgb::from_hex(0x32CD32),
        label: Rgb::from_hex(0xFFFFFF),
    },
    Theme {
        work: Rgb::from_hex(0xFF1493),
        brk: Rgb::from_hex(0x00FA9A),
        label: Rgb::from_hex(0x87CEEB),
    },
];

/// Runtime theme selection. Out-of-range indices are rejected and leave the
/// selection unchanged.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThemeSelect {
    index: usize,
}

impl ThemeSelect {
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Select a theme by index into [`THEMES`].
    pub fn set(&mut self, index: usize) -> Result<(), SettingError> {
        if index >= THEMES.len() {
            return Err(SettingError::AboveMaximum);
        }
        self.index = index;
        Ok(())
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The currently selected triple
    pub fn current(&self) -> &'static Theme {
        &THEMES[self.index]
    }
}
