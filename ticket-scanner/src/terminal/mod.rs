//!
//! Line oriented adapters for running scan session in a terminal.
//! Every non-blank line of the standard input is treated as a decoded QR payload.
//!

mod terminal_camera;
mod terminal_presenter;

pub use terminal_camera::*;
pub use terminal_presenter::*;

use std::{
    io::{self, BufRead},
    sync::Arc,
};
use tokio::sync::{mpsc, Mutex};

pub type SharedLines = Arc<Mutex<mpsc::Receiver<String>>>;

///
/// Starts reading standard input on a dedicated thread
/// and returns camera and presenter sharing it.
///
pub fn open(buffer: usize) -> (TerminalCamera, TerminalPresenter<io::Stdout>) {
    let (lines_tx, lines_rx) = mpsc::channel(buffer);

    std::thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    tracing::warn!(%err, "reading standard input failed");
                    break;
                }
            };
            if lines_tx.blocking_send(line).is_err() {
                break;
            }
        }
        tracing::debug!("standard input closed");
    });

    let lines = Arc::new(Mutex::new(lines_rx));
    let camera = TerminalCamera::new(lines.clone());
    let presenter = TerminalPresenter::new(io::stdout(), lines);

    (camera, presenter)
}

///
/// Drops lines typed while nobody was waiting for input.
/// Returns number of dropped lines.
///
fn discard_pending(lines: &mut mpsc::Receiver<String>) -> usize {
    let mut discarded = 0;
    while lines.try_recv().is_ok() {
        discarded += 1;
    }
    if discarded > 0 {
        tracing::debug!(discarded, "discarded pending input");
    }

    discarded
}
