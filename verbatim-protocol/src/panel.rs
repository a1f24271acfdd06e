//! Typed messages carried over the panel link
//!
//! Outbound messages drive the word grid; inbound events report touches and
//! the panel's liveness ping. Unknown message types decode to `None` so a
//! newer panel firmware cannot wedge the controller.

use heapless::Vec;

use crate::frame::{Frame, FrameError, MAX_PAYLOAD};

// Inbound (panel -> controller)
pub const MSG_TOUCH: u8 = 0x01;
pub const MSG_PING: u8 = 0x02;

// Outbound (controller -> panel)
pub const MSG_CLEAR_ALL: u8 = 0x10;
pub const MSG_WORD: u8 = 0x11;
pub const MSG_SHOW_CLOCK: u8 = 0x12;
pub const MSG_PONG: u8 = 0x1F;

/// Longest word text a single frame can carry
pub const MAX_WORD_TEXT: usize = MAX_PAYLOAD - 5;

/// Controller-to-panel message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelMessage<'a> {
    /// Blank every cell. Sent at the start of each display burst.
    ClearAll,
    /// Light one word: inclusive cell range, color, uppercase ASCII text.
    Word {
        start: u8,
        end: u8,
        rgb: [u8; 3],
        text: &'a str,
    },
    /// Hand the grid back to the panel's own clock face.
    ShowClock,
    /// Heartbeat reply to a panel ping.
    Pong,
}

impl PanelMessage<'_> {
    /// Encode into a link frame.
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            Self::ClearAll => Ok(Frame::bare(MSG_CLEAR_ALL)),
            Self::ShowClock => Ok(Frame::bare(MSG_SHOW_CLOCK)),
            Self::Pong => Ok(Frame::bare(MSG_PONG)),
            Self::Word {
                start,
                end,
                rgb,
                text,
            } => {
                let mut payload: Vec<u8, MAX_PAYLOAD> = Vec::new();
                payload
                    .extend_from_slice(&[*start, *end, rgb[0], rgb[1], rgb[2]])
                    .map_err(|_| FrameError::Oversize)?;
                payload
                    .extend_from_slice(text.as_bytes())
                    .map_err(|_| FrameError::Oversize)?;
                Frame::new(MSG_WORD, &payload)
            }
        }
    }
}

/// Panel-to-controller event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelEvent {
    /// A touch at panel coordinates, little-endian u16 pairs on the wire.
    Touch { x: u16, y: u16 },
    /// Liveness ping; the controller answers with [`PanelMessage::Pong`].
    Ping,
}

impl PanelEvent {
    /// Decode a received frame. Unknown types and short payloads yield
    /// `None`.
    pub fn from_frame(frame: &Frame) -> Option<Self> {
        match frame.kind {
            MSG_PING => Some(Self::Ping),
            MSG_TOUCH => {
                let p = frame.payload.as_slice();
                if p.len() < 4 {
                    return None;
                }
                Some(Self::Touch {
                    x: u16::from_le_bytes([p[0], p[1]]),
                    y: u16::from_le_bytes([p[2], p[3]]),
                })
            }
            _ => None,
        }
    }

    #[cfg(test)]
    fn to_frame(self) -> Frame {
        match self {
            Self::Ping => Frame::bare(MSG_PING),
            Self::Touch { x, y } => {
                let mut payload = [0u8; 4];
                payload[..2].copy_from_slice(&x.to_le_bytes());
                payload[2..].copy_from_slice(&y.to_le_bytes());
                Frame::new(MSG_TOUCH, &payload).unwrap()
            }
        }
    }
}
