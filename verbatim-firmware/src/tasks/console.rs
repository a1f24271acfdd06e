//! Console UART task
//!
//! Line-oriented command console. Bytes are accumulated until CR or LF,
//! the line is parsed, and accepted commands are routed to the controller.
//! The console acknowledges parse results with `OK`/`ERR`; range checks
//! happen later in the session core and are reported over defmt.

use defmt::*;
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embedded_io_async::{Read, Write};
use heapless::Vec;

use verbatim_protocol::{parse, ParseError};

use crate::channels::{ControlInput, CONTROL_CHANNEL};

/// Maximum console line length
const LINE_SIZE: usize = 32;

/// Console task - parses commands from the serial console
#[embassy_executor::task]
pub async fn console_task(mut rx: BufferedUartRx<'static>, mut tx: BufferedUartTx<'static>) {
    info!("Console task started");

    let mut line: Vec<u8, LINE_SIZE> = Vec::new();
    let mut overflowed = false;
    let mut buf = [0u8; 32];

    loop {
        let n = match rx.read(&mut buf).await {
            Ok(n) => n,
            Err(e) => {
                warn!("Console read error: {:?}", e);
                continue;
            }
        };

        for &byte in &buf[..n] {
            if byte == b'\r' || byte == b'\n' {
                if overflowed {
                    warn!("Console line too long, discarded");
                    reply(&mut tx, b"ERR\r\n").await;
                } else {
                    handle_line(&line, &mut tx).await;
                }
                line.clear();
                overflowed = false;
            } else if line.push(byte).is_err() {
                overflowed = true;
            }
        }
    }
}

/// Parse one complete line and dispatch the command
async fn handle_line(line: &[u8], tx: &mut BufferedUartTx<'static>) {
    let Ok(text) = core::str::from_utf8(line) else {
        reply(tx, b"ERR\r\n").await;
        return;
    };

    match parse(text) {
        Ok(command) => {
            debug!("Console command: {:?}", command);
            if CONTROL_CHANNEL
                .try_send(ControlInput::Console(command))
                .is_err()
            {
                warn!("Control channel full, dropping command");
                reply(tx, b"ERR\r\n").await;
            } else {
                reply(tx, b"OK\r\n").await;
            }
        }
        Err(ParseError::Empty) => {
            // Blank line, stay quiet
        }
        Err(e) => {
            warn!("Console parse error: {:?}", e);
            reply(tx, b"ERR\r\n").await;
        }
    }
}

async fn reply(tx: &mut BufferedUartTx<'static>, text: &[u8]) {
    if let Err(e) = tx.write_all(text).await {
        warn!("Console write error: {:?}", e);
    }
}
