//! Play subcommand handler
//!
//! Runs one selection window to completion, printing a status line every
//! time another second is filled. Ctrl-C pauses the clock and exits.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use trimr::cli::WindowArgs;
use trimr::{Config, InMemoryTimelineRepository, PlaybackClock, TrimmerSession};

use super::Window;

/// Upper bound on how long the loop sleeps between syncs.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Widest fill bar, in cells.
const MAX_BAR_CELLS: u32 = 40;

/// Build the fill bar for a window of `total` seconds with `filled` done.
///
/// # Returns
/// One cell per second, scaled down to `MAX_BAR_CELLS` for longer windows.
/// `━` marks filled cells and `─` the rest.
pub fn fill_bar(filled: u32, total: u32) -> String {
    let total = total.max(1);
    let cells = total.min(MAX_BAR_CELLS);
    let filled = u64::from(filled.min(total)) * u64::from(cells) / u64::from(total);
    // filled <= cells <= MAX_BAR_CELLS
    let filled = filled as usize;
    let cells = cells as usize;

    let mut bar = String::with_capacity(cells * '━'.len_utf8());
    bar.extend(std::iter::repeat('━').take(filled));
    bar.extend(std::iter::repeat('─').take(cells - filled));
    bar
}

fn status_line(session: &TrimmerSession) -> String {
    format!(
        "{} {:>3}/{}s  {}  {}",
        fill_bar(session.elapsed_secs(), session.selection_secs()),
        session.elapsed_secs(),
        session.selection_secs(),
        session.current_time_text(),
        session.current_percent_text(),
    )
}

#[cfg(not(tarpaulin_include))]
pub fn handle_play(
    args: &WindowArgs,
    start: f64,
    key: Option<usize>,
    tick_ms: Option<u64>,
) -> Result<()> {
    let config = Config::load()?;
    let window = Window::resolve(args, &config);
    let interval = tick_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.playback.tick_interval());

    let mut session = TrimmerSession::new(
        InMemoryTimelineRepository::new(config.timeline.clone()),
        window.total_secs,
        window.selection_secs,
        PlaybackClock::with_interval(interval),
    );

    match key {
        Some(index) => {
            if !session.jump_to_key(index) {
                bail!(
                    "No key time at index {} ({} available)",
                    index,
                    session.timeline().key_times().len()
                );
            }
        }
        None => session.on_user_dragged_trimmer(start),
    }

    println!(
        "Selection {}  ({})",
        session.selection_percent_text(),
        session.selection_time_text()
    );

    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
        .context("Failed to install Ctrl-C handler")?;

    tracing::info!(
        start = session.start_percent(),
        selection_secs = session.selection_secs(),
        interval_ms = interval.as_millis() as u64,
        "playing selection"
    );
    session.play();

    let poll = POLL_INTERVAL.min(interval);
    let mut last_printed = None;
    loop {
        if session.sync() && last_printed != Some(session.elapsed_secs()) {
            last_printed = Some(session.elapsed_secs());
            println!("{}", status_line(&session));
        }

        if !session.is_playing() {
            break;
        }

        if interrupted.load(Ordering::SeqCst) {
            session.pause();
            println!(
                "Paused at {} ({} of {}s filled)",
                session.current_time_text(),
                session.elapsed_secs(),
                session.selection_secs()
            );
            return Ok(());
        }

        thread::sleep(poll);
    }

    println!("Done at {}", session.current_time_text());
    Ok(())
}
