//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use verbatim_protocol::{Command, TouchAction};

/// Channel capacity for control inputs (console commands and touches)
const CONTROL_CHANNEL_SIZE: usize = 8;

/// A control input routed to the controller task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlInput {
    /// Parsed console command
    Console(Command),
    /// Touch zone action from the panel
    Touch(TouchAction),
}

/// Session indicator LED color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorColor {
    Off,
    /// Work session
    Red,
    /// Short break
    Green,
    /// Long break
    Blue,
}

/// Control inputs from the console and panel touch zones
pub static CONTROL_CHANNEL: Channel<CriticalSectionRawMutex, ControlInput, CONTROL_CHANNEL_SIZE> =
    Channel::new();

/// Signal that a panel update is ready to be sent
pub static PANEL_UPDATE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Signal that a heartbeat (PING) was received from the panel.
/// Consumed by the TX task, which answers with PONG.
pub static HEARTBEAT_RECEIVED: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// The same heartbeat, observed separately by the controller for link
/// supervision so neither consumer can starve the other
pub static LINK_HEARTBEAT: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Indicator LED color (updated by controller)
pub static INDICATOR: Signal<CriticalSectionRawMutex, IndicatorColor> = Signal::new();

/// Phase completion alert request (blinks the indicator)
pub static ALERT: Signal<CriticalSectionRawMutex, ()> = Signal::new();
