use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// What: Spawn the blocking thread that reads terminal events.
///
/// Inputs:
/// - `headless`: When `true`, no thread is started
/// - `event_tx`: Channel the events are forwarded to
/// - `cancelled`: Flag checked between polls to stop the thread
///
/// Details:
/// - Polls with a 50ms timeout so the cancellation flag is honoured promptly
/// - Exits when the receiver is dropped
/// - Transient read errors are ignored
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => {
                    if let Ok(ev) = crossterm::event::read() {
                        if cancelled.load(Ordering::Relaxed) {
                            break;
                        }
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}
