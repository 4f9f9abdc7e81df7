//! trimr - waveform trimmer core
//!
//! The logic behind a scrollable waveform trimmer: a fixed-length selection
//! window that slides over a song, key-time markers to jump to, and a
//! play/pause/reset transport that fills the window one second at a time.
//!
//! - `selection`: `SelectionBounds` and the drag/jump start policies
//! - `playback`: `PlaybackClock`, the resumable per-second index counter
//! - `timeline`: key-time markers and their repository
//! - `session`: `TrimmerSession`, the coordinator a front end drives
//! - `config`: TOML configuration
//!
//! # Usage
//!
//! ```no_run
//! use trimr::{InMemoryTimelineRepository, PlaybackClock, TrimmerSession};
//!
//! let mut session = TrimmerSession::new(
//!     InMemoryTimelineRepository::default(),
//!     180.0,
//!     10,
//!     PlaybackClock::new(),
//! );
//! session.on_user_tapped_key_time(0.45);
//! session.play();
//! while !session.is_complete() {
//!     if session.sync() {
//!         println!("{} {}", session.current_time_text(), session.current_percent_text());
//!     }
//!     std::thread::sleep(std::time::Duration::from_millis(50));
//! }
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod playback;
pub mod selection;
pub mod session;
pub mod timeline;

pub use config::{Config, ConfigError};
pub use playback::{ClockPhase, PlaybackClock, PlaybackControl};
pub use selection::SelectionBounds;
pub use session::TrimmerSession;
pub use timeline::{InMemoryTimelineRepository, Timeline, TimelineRepository};
