//! Repeating timer thread.
//!
//! Calls a tick callback once per interval on a dedicated thread until the
//! callback returns `false` or the ticker is cancelled. Deadlines are
//! computed from the spawn instant so ticks do not drift with callback
//! latency.

use std::io;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Handle to a running timer thread.
///
/// Dropping the handle wakes the thread and lets it exit on its own;
/// `cancel` additionally waits for it.
#[derive(Debug)]
pub(crate) struct Ticker {
    cancel_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub(crate) fn spawn<F>(interval: Duration, mut on_tick: F) -> io::Result<Self>
    where
        F: FnMut() -> bool + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();

        let handle = thread::Builder::new()
            .name("trimr-clock".to_string())
            .spawn(move || {
                let mut deadline = Instant::now() + interval;
                loop {
                    let wait = deadline.saturating_duration_since(Instant::now());
                    match cancel_rx.recv_timeout(wait) {
                        Err(RecvTimeoutError::Timeout) => {
                            if !on_tick() {
                                break;
                            }
                            deadline += interval;
                        }
                        // Explicit cancel or every handle dropped
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
            })?;

        Ok(Self {
            cancel_tx: Some(cancel_tx),
            handle: Some(handle),
        })
    }

    /// Stop the thread and wait for it to finish.
    ///
    /// Must not be called while holding a lock the tick callback takes.
    pub(crate) fn cancel(mut self) {
        self.cancel_tx.take();
        if let Some(handle) = self.handle.take() {
            if handle.thread().id() != thread::current().id() {
                let _ = handle.join();
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        // Disconnects the channel; the handle is detached
        self.cancel_tx.take();
    }
}
