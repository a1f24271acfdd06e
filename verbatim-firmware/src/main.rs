//! Verbatim - Word Clock Pomodoro Firmware
//!
//! Main firmware binary for the RP2040 controller behind an LED word-grid
//! clock. Runs a pomodoro countdown that spells the remaining time out in
//! words and pushes it to the panel over UART; the panel itself stays a
//! dumb terminal.
//!
//! Named "verbatim" because the clock tells you the time word for word.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::{UART0, UART1};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

mod channels;
mod controller;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    UART1_IRQ => BufferedInterruptHandler<UART1>;
});

// Static cells for UART buffers (must live forever)
static PANEL_TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static PANEL_RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static CONSOLE_TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static CONSOLE_RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Verbatim firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // UART0: panel link (115200 baud default)
    let panel_config = UartConfig::default();
    let panel_tx_buf = PANEL_TX_BUF.init([0u8; 256]);
    let panel_rx_buf = PANEL_RX_BUF.init([0u8; 256]);
    let panel_uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, panel_config);
    let panel_uart = panel_uart.into_buffered(Irqs, panel_tx_buf, panel_rx_buf);
    let (panel_tx, panel_rx) = panel_uart.split();

    info!("Panel UART initialized");

    // UART1: command console
    let console_config = UartConfig::default();
    let console_tx_buf = CONSOLE_TX_BUF.init([0u8; 256]);
    let console_rx_buf = CONSOLE_RX_BUF.init([0u8; 256]);
    let console_uart = Uart::new_blocking(p.UART1, p.PIN_4, p.PIN_5, console_config);
    let console_uart = console_uart.into_buffered(Irqs, console_tx_buf, console_rx_buf);
    let (console_tx, console_rx) = console_uart.split();

    info!("Console UART initialized");

    // RGB session indicator LED
    let led_red = Output::new(p.PIN_16, Level::Low);
    let led_green = Output::new(p.PIN_17, Level::Low);
    let led_blue = Output::new(p.PIN_18, Level::Low);

    info!("Indicator LED initialized");

    // Spawn tasks
    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::panel_rx_task(panel_rx)).unwrap();
    spawner.spawn(tasks::panel_tx_task(panel_tx)).unwrap();
    spawner
        .spawn(tasks::console_task(console_rx, console_tx))
        .unwrap();
    spawner
        .spawn(tasks::indicator_task(led_red, led_green, led_blue))
        .unwrap();
    spawner.spawn(tasks::controller_task()).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
