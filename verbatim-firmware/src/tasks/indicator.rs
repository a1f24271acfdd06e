//! Session indicator LED task
//!
//! Drives a common-cathode RGB LED: red during work, green during short
//! breaks, blue during long breaks, off while idle or paused. A phase
//! completion briefly blinks yellow before the steady color resumes.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Output;
use embassy_time::Timer;

use crate::channels::{IndicatorColor, ALERT, INDICATOR};

/// Completion alert: blink count and half-period
const ALERT_BLINKS: u8 = 3;
const ALERT_HALF_MS: u64 = 200;

/// Indicator task - owns the RGB LED pins
#[embassy_executor::task]
pub async fn indicator_task(
    mut red: Output<'static>,
    mut green: Output<'static>,
    mut blue: Output<'static>,
) {
    info!("Indicator task started");

    let mut color = IndicatorColor::Off;
    apply(&mut red, &mut green, &mut blue, color);

    loop {
        match select(INDICATOR.wait(), ALERT.wait()).await {
            Either::First(next) => {
                if next != color {
                    debug!("Indicator: {:?}", next);
                    color = next;
                    apply(&mut red, &mut green, &mut blue, color);
                }
            }
            Either::Second(()) => {
                debug!("Completion alert");
                for _ in 0..ALERT_BLINKS {
                    // Yellow: red and green together
                    set(&mut red, true);
                    set(&mut green, true);
                    set(&mut blue, false);
                    Timer::after_millis(ALERT_HALF_MS).await;

                    set(&mut red, false);
                    set(&mut green, false);
                    set(&mut blue, false);
                    Timer::after_millis(ALERT_HALF_MS).await;
                }

                // A phase change usually lands during the blink
                if let Some(next) = INDICATOR.try_take() {
                    color = next;
                }
                apply(&mut red, &mut green, &mut blue, color);
            }
        }
    }
}

fn apply(red: &mut Output<'static>, green: &mut Output<'static>, blue: &mut Output<'static>, color: IndicatorColor) {
    set(red, color == IndicatorColor::Red);
    set(green, color == IndicatorColor::Green);
    set(blue, color == IndicatorColor::Blue);
}

fn set(pin: &mut Output<'static>, on: bool) {
    if on {
        pin.set_high();
    } else {
        pin.set_low();
    }
}
