//! Resumable per-second playback clock.
//!
//! `start(from, to)` means "the next emitted index is `from`". The setup
//! value is emitted synchronously, then one index per tick until `to - 1`
//! has been emitted, at which point the clock stops by itself.
//!
//! All state lives behind one mutex shared with the timer thread. Every
//! cancellation bumps a generation counter under that mutex, so a tick that
//! was already waiting for the lock sees a stale generation and is dropped
//! instead of emitting after `pause()` or `reset()` returned.

use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use super::broadcast::IndexBroadcast;
use super::ticker::Ticker;
use super::PlaybackControl;

/// Sentinel index meaning "nothing played yet".
pub const NOT_STARTED: i64 = -1;

/// Nominal tick interval.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Observable phase of the clock's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockPhase {
    /// Never started, or reset: both indices are `NOT_STARTED`
    Idle,
    /// Advancing once per tick
    Running,
    /// Stopped by `pause()`, indices frozen
    Paused,
    /// Stopped at the boundary, current index frozen at `end - 1`
    Finished,
}

#[derive(Debug)]
struct ClockState {
    current: i64,
    end: i64,
    phase: ClockPhase,
    generation: u64,
    broadcast: IndexBroadcast,
    ticker: Option<Ticker>,
}

impl ClockState {
    fn new() -> Self {
        Self {
            current: NOT_STARTED,
            end: NOT_STARTED,
            phase: ClockPhase::Idle,
            generation: 0,
            broadcast: IndexBroadcast::new(NOT_STARTED),
            ticker: None,
        }
    }

    /// Apply `start`'s setup. Returns the generation the timer must carry,
    /// or `None` when the clock finished without needing one.
    fn begin(&mut self, from: i64, to: i64) -> Option<u64> {
        let from = from.max(0);
        self.end = from.max(to);

        let last = to.saturating_sub(1);
        if from >= last {
            self.current = last.max(NOT_STARTED);
            self.phase = ClockPhase::Finished;
            self.broadcast.send(self.current);
            return None;
        }

        self.current = from;
        self.phase = ClockPhase::Running;
        self.generation += 1;
        self.broadcast.send(from);
        Some(self.generation)
    }

    /// One tick. Returns whether the clock keeps running.
    fn advance(&mut self) -> bool {
        let next = self.current + 1;
        self.current = next;
        self.broadcast.send(next);

        if next >= self.end - 1 {
            self.phase = ClockPhase::Finished;
            self.generation += 1;
            false
        } else {
            true
        }
    }

    /// Invalidate any in-flight tick and hand back the timer to cancel.
    fn halt(&mut self) -> Option<Ticker> {
        self.generation += 1;
        self.ticker.take()
    }
}

/// A cancellable, resumable per-tick index counter.
///
/// Indices are delivered to every subscriber in production order. Each
/// subscription starts with the current index.
///
/// # Example
///
/// ```no_run
/// use trimr::playback::PlaybackClock;
///
/// let clock = PlaybackClock::new();
/// let indices = clock.subscribe();
/// clock.start(0, 10);
/// for index in indices.iter().skip(1) {
///     println!("second {} filled", index + 1);
///     if index == 9 {
///         break;
///     }
/// }
/// ```
#[derive(Debug)]
pub struct PlaybackClock {
    state: Arc<Mutex<ClockState>>,
    interval: Duration,
}

impl PlaybackClock {
    /// Clock ticking once per second.
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_TICK_INTERVAL)
    }

    /// Clock with a custom tick interval (floored at 1ms).
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(ClockState::new())),
            interval: interval.max(MIN_TICK_INTERVAL),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Begin emitting from `from` toward the exclusive `to`.
    ///
    /// A no-op while already running. When `from >= to - 1` the clock emits
    /// `to - 1` (never below `NOT_STARTED`) and stops without a timer.
    pub fn start(&self, from: i64, to: i64) {
        let mut state = self.lock();
        if state.phase == ClockPhase::Running {
            tracing::debug!(from, to, "start ignored, clock already running");
            return;
        }

        let Some(generation) = state.begin(from, to) else {
            tracing::debug!(index = state.current, "clock at boundary, not scheduling ticks");
            return;
        };

        tracing::debug!(from = state.current, end = state.end, "clock started");

        let weak = Arc::downgrade(&self.state);
        match Ticker::spawn(self.interval, move || tick(&weak, generation)) {
            Ok(ticker) => state.ticker = Some(ticker),
            Err(e) => {
                tracing::warn!(error = %e, "failed to spawn clock timer, pausing");
                state.phase = ClockPhase::Paused;
                state.generation += 1;
            }
        }
    }

    /// Stop ticking and keep the current position for a later `start`.
    pub fn pause(&self) {
        let ticker = {
            let mut state = self.lock();
            if state.phase != ClockPhase::Running {
                return;
            }
            state.phase = ClockPhase::Paused;
            tracing::debug!(index = state.current, "clock paused");
            state.halt()
        };
        if let Some(ticker) = ticker {
            ticker.cancel();
        }
    }

    /// Stop ticking, discard progress and emit `NOT_STARTED`.
    pub fn reset(&self) {
        let ticker = {
            let mut state = self.lock();
            state.current = NOT_STARTED;
            state.end = NOT_STARTED;
            state.phase = ClockPhase::Idle;
            state.broadcast.send(NOT_STARTED);
            tracing::debug!("clock reset");
            state.halt()
        };
        if let Some(ticker) = ticker {
            ticker.cancel();
        }
    }

    /// Subscribe to the index stream, starting with the current index.
    pub fn subscribe(&self) -> Receiver<i64> {
        self.lock().broadcast.subscribe()
    }

    /// Most recently emitted index.
    pub fn current_index(&self) -> i64 {
        self.lock().broadcast.latest()
    }

    /// Exclusive end of the current run.
    pub fn end_index(&self) -> i64 {
        self.lock().end
    }

    pub fn is_running(&self) -> bool {
        self.lock().phase == ClockPhase::Running
    }

    pub fn phase(&self) -> ClockPhase {
        self.lock().phase
    }

    fn lock(&self) -> MutexGuard<'_, ClockState> {
        lock_state(&self.state)
    }
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PlaybackClock {
    fn drop(&mut self) {
        let ticker = self.lock().halt();
        if let Some(ticker) = ticker {
            ticker.cancel();
        }
    }
}

impl PlaybackControl for PlaybackClock {
    fn start(&self, from: i64, to: i64) {
        PlaybackClock::start(self, from, to);
    }

    fn pause(&self) {
        PlaybackClock::pause(self);
    }

    fn reset(&self) {
        PlaybackClock::reset(self);
    }

    fn subscribe(&self) -> Receiver<i64> {
        PlaybackClock::subscribe(self)
    }
}

/// Timer callback. Returns whether the timer should keep firing.
fn tick(state: &Weak<Mutex<ClockState>>, generation: u64) -> bool {
    let Some(state) = state.upgrade() else {
        return false;
    };
    let mut state = lock_state(&state);

    if state.generation != generation || state.phase != ClockPhase::Running {
        tracing::trace!("discarding stale tick");
        return false;
    }

    let keep_running = state.advance();
    tracing::trace!(index = state.current, "tick");
    if !keep_running {
        tracing::debug!(index = state.current, "clock reached boundary");
        // Running on the timer thread itself; dropping detaches it
        state.ticker = None;
    }
    keep_running
}

// A panicking subscriber cannot corrupt the counters, so poisoning is ignored
fn lock_state(state: &Mutex<ClockState>) -> MutexGuard<'_, ClockState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
