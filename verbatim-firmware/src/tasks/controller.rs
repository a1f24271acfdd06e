//! Main controller task
//!
//! Receives control inputs and tick signals, advances the session, and
//! pushes panel plans and indicator updates to the output tasks.

use defmt::*;
use embassy_futures::select::{select, Either};

use crate::channels::{ControlInput, ALERT, CONTROL_CHANNEL, INDICATOR, LINK_HEARTBEAT, PANEL_UPDATE};
use crate::controller::Controller;
use crate::tasks::panel_tx::PANEL_PLAN;
use crate::tasks::tick::{TICK_INTERVAL_MS, TICK_SIGNAL};

use verbatim_core::session::SessionEvent;
use verbatim_protocol::{LinkEvent, LinkMonitor};

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task() {
    info!("Controller task started");

    let mut controller = Controller::new();
    let mut link = LinkMonitor::new();

    // Hand the grid to the clock face until the first PS
    INDICATOR.signal(controller.indicator_color());
    push_plan(&controller).await;

    loop {
        match select(CONTROL_CHANNEL.receive(), TICK_SIGNAL.wait()).await {
            Either::First(input) => {
                debug!("Input: {:?}", input);

                let event = match input {
                    ControlInput::Console(command) => match controller.handle_command(command) {
                        Ok(event) => event,
                        Err(e) => {
                            warn!("Command rejected: {:?}", e);
                            continue;
                        }
                    },
                    ControlInput::Touch(action) => controller.handle_touch(action),
                };

                if let Some(event) = event {
                    handle_event(event);
                }

                INDICATOR.signal(controller.indicator_color());
                push_plan(&controller).await;
            }

            Either::Second(()) => {
                // Panel link supervision rides the same 1 Hz beat
                if LINK_HEARTBEAT.signaled() {
                    LINK_HEARTBEAT.reset();
                    if link.ping_received() == Some(LinkEvent::Restored) {
                        info!("Panel link restored");
                    }
                }
                if link.update_time(TICK_INTERVAL_MS) == Some(LinkEvent::Lost) {
                    warn!("Panel link lost, no ping from the panel");
                }

                let event = controller.tick();
                if let Some(event) = event {
                    debug!("Tick event: {:?}", event);
                    handle_event(event);
                    INDICATOR.signal(controller.indicator_color());
                }

                // The spelled-out countdown changes every second; a
                // completion transition also changes the grid even though
                // it stops the countdown (break end leaves Idle showing
                // READY)
                if event.is_some() || controller.counting() {
                    push_plan(&controller).await;
                }
            }
        }
    }
}

/// React to a session event: log it and fire the completion alert.
fn handle_event(event: SessionEvent) {
    debug!("Event: {:?}", event);

    if event.is_completion() {
        ALERT.signal(());
    }

    if let SessionEvent::WorkCompleted {
        sessions,
        long_break,
    } = event
    {
        info!(
            "Work session {} complete, {} break next",
            sessions,
            if long_break { "long" } else { "short" }
        );
    }
}

/// Copy the current plan to the shared buffer and signal the TX task
async fn push_plan(controller: &Controller) {
    let mut plan = PANEL_PLAN.lock().await;
    *plan = controller.plan();
    PANEL_UPDATE.signal(());
}
