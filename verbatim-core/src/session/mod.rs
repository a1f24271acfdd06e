//! Session lifecycle tracking
//!
//! A single owned `Session` is created at startup and lives for the whole
//! process; commands and the 1 Hz tick mutate it in place.

pub mod events;
pub mod machine;

pub use events::{SessionEvent, SettingError};
pub use machine::{Phase, Session, BREAK_MINUTES_MAX, WORK_MINUTES_MAX};
