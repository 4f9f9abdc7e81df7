//! Single-producer, multi-consumer index channel.
//!
//! Keeps the most recent value and fans every new value out to all live
//! subscribers over `std::sync::mpsc` channels. A subscriber whose
//! receiver has been dropped is pruned on the next send.

use std::sync::mpsc::{self, Receiver, Sender};

/// Index fan-out with "last value retained" semantics.
#[derive(Debug)]
pub(crate) struct IndexBroadcast {
    latest: i64,
    subscribers: Vec<Sender<i64>>,
}

impl IndexBroadcast {
    pub(crate) fn new(initial: i64) -> Self {
        Self {
            latest: initial,
            subscribers: Vec::new(),
        }
    }

    /// Register a new subscriber.
    ///
    /// The receiver yields the current value first, then every later send.
    pub(crate) fn subscribe(&mut self) -> Receiver<i64> {
        let (tx, rx) = mpsc::channel();
        // Receiver is alive in this scope, so the send cannot fail
        let _ = tx.send(self.latest);
        self.subscribers.push(tx);
        rx
    }

    /// Record `value` as the latest and deliver it to every subscriber.
    pub(crate) fn send(&mut self, value: i64) {
        self.latest = value;
        self.subscribers.retain(|tx| tx.send(value).is_ok());
    }

    pub(crate) fn latest(&self) -> i64 {
        self.latest
    }

    #[cfg(test)]
    pub(crate) fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
