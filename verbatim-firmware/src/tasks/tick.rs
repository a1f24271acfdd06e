//! One-second countdown cadence
//!
//! The overlay only ever changes in whole seconds, so a single signal
//! paces everything: the controller burns one session tick (and one link
//! supervision step) per TICK_SIGNAL, and the session itself ignores
//! ticks while not running. The signal coalesces if the controller falls
//! behind, which loses a beat rather than bursting to catch up.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u32 = 1000;

/// One-second beat for the controller
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, ()> = Signal::new();

#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    // Ticker rather than Timer so controller work overlapping a beat
    // cannot drift the cadence
    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));

    loop {
        ticker.next().await;
        TICK_SIGNAL.signal(());
    }
}
