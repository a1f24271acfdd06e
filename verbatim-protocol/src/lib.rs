//! Wire surfaces of the Verbatim controller
//!
//! Two independent surfaces live here:
//!
//! - The line-oriented ASCII **console grammar** (`PS`, `PW25`, ...) decoded
//!   into typed [`Command`] variants. The session core never sees raw text.
//! - The binary **panel link** to the LED word grid. The panel is a dumb
//!   pixel pusher: it renders the word placements it is sent and reports
//!   touch coordinates back. All timer logic stays on the controller.
//!
//! Panel frames use a simple byte format:
//! ```text
//! ┌──────┬──────┬─────┬─────────────┬──────────┐
//! │ SYNC │ TYPE │ LEN │ PAYLOAD     │ CHECKSUM │
//! │ 1B   │ 1B   │ 1B  │ 0–24B       │ 1B       │
//! └──────┴──────┴─────┴─────────────┴──────────┘
//! ```
//! The checksum is the two's complement of the byte sum after SYNC, so a
//! valid frame sums to zero.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod frame;
pub mod link;
pub mod panel;
pub mod touch;

pub use command::{parse, Command, ParseError};
pub use frame::{Decoder, Frame, FrameError, FRAME_SYNC, MAX_PAYLOAD};
pub use link::{LinkEvent, LinkMonitor};
pub use panel::{PanelEvent, PanelMessage};
pub use touch::{action_for, TouchAction, PANEL_WIDTH};
