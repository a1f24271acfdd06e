//! Panel UART receive task
//!
//! Receives frames from the LED panel and dispatches touch actions and
//! heartbeats.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use verbatim_protocol::{action_for, Decoder, PanelEvent};

use crate::channels::{ControlInput, CONTROL_CHANNEL, HEARTBEAT_RECEIVED, LINK_HEARTBEAT};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Panel RX task - receives and parses frames from the panel
#[embassy_executor::task]
pub async fn panel_rx_task(mut rx: BufferedUartRx<'static>) {
    info!("Panel RX task started");

    let mut decoder = Decoder::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match decoder.feed(byte) {
                        Ok(Some(frame)) => {
                            if let Some(event) = PanelEvent::from_frame(&frame) {
                                handle_panel_event(event);
                            } else {
                                warn!("Unknown panel frame type {=u8:#x}", frame.kind);
                            }
                        }
                        Ok(None) => {
                            // Need more bytes
                        }
                        Err(e) => {
                            warn!("Frame decode error: {:?}", e);
                        }
                    }
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

/// Handle a decoded panel event
fn handle_panel_event(event: PanelEvent) {
    match event {
        PanelEvent::Ping => {
            trace!("PING received");
            HEARTBEAT_RECEIVED.signal(());
            LINK_HEARTBEAT.signal(());
        }
        PanelEvent::Touch { x, y } => {
            debug!("Touch at ({}, {})", x, y);
            let Some(action) = action_for(x, y) else {
                // Out-of-range coordinate, panel noise
                return;
            };
            if CONTROL_CHANNEL.try_send(ControlInput::Touch(action)).is_err() {
                warn!("Control channel full, dropping touch");
            }
        }
    }
}
