//! Playback transport for the selection window.
//!
//! - `clock`: `PlaybackClock`, the per-second index counter behind
//!   play/pause/reset
//! - `broadcast`: last-value-retained fan-out of emitted indices
//! - `ticker`: the repeating timer thread that drives the clock

mod broadcast;
mod clock;
mod ticker;

use std::sync::mpsc::Receiver;

pub use clock::{ClockPhase, PlaybackClock, DEFAULT_TICK_INTERVAL, NOT_STARTED};

/// Transport commands and index stream consumed by a trimmer session.
///
/// `PlaybackClock` is the production implementation; sessions accept any
/// implementation so they can be driven by hand in tests.
pub trait PlaybackControl: Send {
    /// Emit `from` next and advance toward the exclusive `to`.
    fn start(&self, from: i64, to: i64);

    /// Stop advancing, keeping the position.
    fn pause(&self);

    /// Stop advancing and emit `NOT_STARTED`.
    fn reset(&self);

    /// Index stream, beginning with the current index.
    fn subscribe(&self) -> Receiver<i64>;
}
