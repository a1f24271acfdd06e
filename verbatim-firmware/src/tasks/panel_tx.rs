//! Panel UART transmit task
//!
//! Sends display bursts and heartbeat responses to the LED panel. A burst
//! is CLEAR followed by every word placement of the current plan, so the
//! panel never shows a half-updated countdown.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Ticker};
use embedded_io_async::Write;

use verbatim_protocol::frame::MAX_FRAME_SIZE;
use verbatim_protocol::PanelMessage;

use crate::channels::{HEARTBEAT_RECEIVED, PANEL_UPDATE};
use crate::controller::PanelPlan;

/// Shared panel plan protected by mutex
pub static PANEL_PLAN: Mutex<CriticalSectionRawMutex, PanelPlan> = Mutex::new(PanelPlan::clock());

/// Panel TX task - sends frames to the panel
#[embassy_executor::task]
pub async fn panel_tx_task(mut tx: BufferedUartTx<'static>) {
    info!("Panel TX task started");

    let mut ticker = Ticker::every(Duration::from_millis(50));

    loop {
        // Answer a pending heartbeat first so the panel never times out
        if HEARTBEAT_RECEIVED.signaled() {
            HEARTBEAT_RECEIVED.reset();
            send_message(&mut tx, &PanelMessage::Pong).await;
            trace!("PONG sent");
        }

        if PANEL_UPDATE.signaled() {
            PANEL_UPDATE.reset();
            send_plan(&mut tx).await;
        }

        ticker.next().await;
    }
}

/// Send the current plan as one burst
async fn send_plan(tx: &mut BufferedUartTx<'static>) {
    let plan = PANEL_PLAN.lock().await;

    if plan.show_clock {
        send_message(tx, &PanelMessage::ShowClock).await;
        trace!("Clock face restored");
        return;
    }

    send_message(tx, &PanelMessage::ClearAll).await;
    for directive in plan.directives.iter() {
        let msg = PanelMessage::Word {
            start: directive.region.start,
            end: directive.region.end,
            rgb: [directive.color.r, directive.color.g, directive.color.b],
            text: directive.text.as_str(),
        };
        send_message(tx, &msg).await;
    }

    trace!("Panel burst sent ({} words)", plan.directives.len());
}

/// Encode and write one message, logging failures
async fn send_message(tx: &mut BufferedUartTx<'static>, msg: &PanelMessage<'_>) {
    let frame = match msg.to_frame() {
        Ok(frame) => frame,
        Err(e) => {
            warn!("Failed to encode panel message: {:?}", e);
            return;
        }
    };

    let mut buf = [0u8; MAX_FRAME_SIZE];
    if let Ok(len) = frame.encode(&mut buf) {
        if let Err(e) = tx.write_all(&buf[..len]).await {
            warn!("Failed to send panel frame: {:?}", e);
        }
    }
}
