//! Keys subcommand handler

use anyhow::Result;

use trimr::cli::WindowArgs;
use trimr::session::format::{format_clock_time, format_percent};
use trimr::{Config, InMemoryTimelineRepository, PlaybackClock, TrimmerSession};

use super::Window;

/// List every configured key time and the selection it jumps to.
pub fn handle_keys(args: &WindowArgs) -> Result<()> {
    let config = Config::load()?;
    let window = Window::resolve(args, &config);

    let mut session = TrimmerSession::new(
        InMemoryTimelineRepository::new(config.timeline.clone()),
        window.total_secs,
        window.selection_secs,
        PlaybackClock::new(),
    );

    let key_times = session.timeline().key_times().to_vec();
    if key_times.is_empty() {
        println!("No key times configured.");
        return Ok(());
    }

    for (index, key) in key_times.iter().enumerate() {
        session.jump_to_key(index);
        println!(
            "[{}] {:>6} {:>6}  ->  {}  ({})",
            index,
            format_percent(*key),
            format_clock_time(key * session.song_duration_secs()),
            session.selection_percent_text(),
            session.selection_time_text(),
        );
    }
    Ok(())
}
