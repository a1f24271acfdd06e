//! Board-agnostic core logic for the Verbatim word clock Pomodoro overlay
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Session state machine (work/break/pause lifecycle, durations, counters)
//! - Number-to-words rendering for the countdown
//! - Display composition (placement directives for the word grid)
//! - Color themes
//!
//! The crate is `no_std`; tests run on the host.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod compose;
pub mod numwords;
pub mod session;
