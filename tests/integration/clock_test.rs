//! Integration tests for PlaybackClock timing behavior

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use trimr::playback::NOT_STARTED;
use trimr::{ClockPhase, PlaybackClock};

const TICK: Duration = Duration::from_millis(25);
const WAIT: Duration = Duration::from_secs(2);

fn next(rx: &Receiver<i64>) -> i64 {
    rx.recv_timeout(WAIT).expect("expected an emission")
}

#[test]
fn two_index_window_emits_zero_then_one() {
    let clock = PlaybackClock::with_interval(TICK);
    let rx = clock.subscribe();
    assert_eq!(next(&rx), NOT_STARTED);

    clock.start(0, 2);

    assert_eq!(next(&rx), 0);
    assert_eq!(next(&rx), 1);
    assert_eq!(
        rx.recv_timeout(TICK * 6),
        Err(RecvTimeoutError::Timeout),
        "a third tick must never arrive"
    );
    assert_eq!(clock.phase(), ClockPhase::Finished);
}

#[test]
fn ticks_are_spaced_by_interval() {
    let clock = PlaybackClock::with_interval(TICK);
    let rx = clock.subscribe();
    next(&rx);

    let started = Instant::now();
    clock.start(0, 4);
    for _ in 0..4 {
        next(&rx);
    }

    // Three ticks after the synchronous setup emission
    assert!(started.elapsed() >= TICK * 3, "finished too early");
}

#[test]
fn pause_then_resume_continues_consecutively() {
    let clock = PlaybackClock::with_interval(TICK);
    let rx = clock.subscribe();
    next(&rx);

    clock.start(0, 10);
    assert_eq!(next(&rx), 0);
    clock.pause();
    let frozen = rx.try_iter().last().unwrap_or(0);

    thread::sleep(TICK * 4);
    assert!(rx.try_iter().next().is_none(), "no emissions while paused");
    assert_eq!(clock.current_index(), frozen);

    clock.start(frozen + 1, 10);
    let resumed: Vec<i64> = (0..3).map(|_| next(&rx)).collect();
    assert_eq!(resumed, vec![frozen + 1, frozen + 2, frozen + 3]);
    clock.reset();
}

#[test]
fn run_to_end_then_restart_after_reset() {
    let clock = PlaybackClock::with_interval(TICK);
    let rx = clock.subscribe();
    next(&rx);

    clock.start(3, 5);
    assert_eq!(next(&rx), 3);
    assert_eq!(next(&rx), 4);

    clock.reset();
    assert_eq!(next(&rx), NOT_STARTED);

    clock.start(0, 2);
    assert_eq!(next(&rx), 0);
    assert_eq!(next(&rx), 1);
}

#[test]
fn clock_can_be_driven_from_another_thread() {
    let clock = std::sync::Arc::new(PlaybackClock::with_interval(TICK));
    let rx = clock.subscribe();
    next(&rx);

    let remote = std::sync::Arc::clone(&clock);
    thread::spawn(move || remote.start(0, 3)).join().unwrap();

    let received: Vec<i64> = (0..3).map(|_| next(&rx)).collect();
    assert_eq!(received, vec![0, 1, 2]);
}
