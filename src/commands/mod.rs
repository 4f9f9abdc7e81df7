//! Subcommand handlers for the trimr binary.

pub mod clamp;
pub mod config;
pub mod keys;
pub mod play;

use trimr::cli::WindowArgs;
use trimr::Config;

/// Window parameters after applying config defaults.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    pub total_secs: f64,
    pub selection_secs: u32,
}

impl Window {
    /// Resolve CLI window flags against the config.
    ///
    /// Out-of-range durations are passed through and floored downstream.
    pub fn resolve(args: &WindowArgs, config: &Config) -> Self {
        Self {
            total_secs: args.total,
            selection_secs: args.selection.unwrap_or(config.selection.duration_secs),
        }
    }
}
