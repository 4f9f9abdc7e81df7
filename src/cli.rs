//! Command-line interface definition.
//!
//! Lives in the library so `xtask` can render man pages from it.

use std::sync::OnceLock;

use clap::{Args, Parser, Subcommand};

/// Version string with build metadata for `--version`.
///
/// Dev builds include the git commit; `release` builds omit it.
pub fn long_version() -> &'static str {
    static LONG_VERSION: OnceLock<String> = OnceLock::new();
    LONG_VERSION.get_or_init(|| {
        let date = option_env!("TRIMR_BUILD_DATE").unwrap_or("unknown");
        match option_env!("VERGEN_GIT_SHA") {
            Some(sha) if cfg!(not(feature = "release")) => {
                format!("{} ({}, built {})", env!("CARGO_PKG_VERSION"), sha, date)
            }
            _ => format!("{} (built {})", env!("CARGO_PKG_VERSION"), date),
        }
    })
}

/// Waveform trimmer: place a fixed selection window and play it back
#[derive(Debug, Parser)]
#[command(name = "trimr", version, long_version = long_version())]
pub struct Cli {
    /// Enable debug logging (overridden by TRIMR_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Clamp a requested selection start into the legal range
    Clamp {
        /// Requested start as a fraction of the song (0.0 - 1.0)
        #[arg(allow_negative_numbers = true)]
        percent: f64,

        #[command(flatten)]
        window: WindowArgs,
    },

    /// List key times and where the selection lands on each
    Keys {
        #[command(flatten)]
        window: WindowArgs,
    },

    /// Fill one selection window second by second
    Play {
        #[command(flatten)]
        window: WindowArgs,

        /// Selection start as a fraction of the song
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true, conflicts_with = "key")]
        start: f64,

        /// Start at the key time with this index (see `trimr keys`)
        #[arg(long, value_name = "INDEX")]
        key: Option<usize>,

        /// Milliseconds per tick (defaults to the configured interval)
        #[arg(long, value_name = "MS")]
        tick_ms: Option<u64>,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Song and window durations shared by several commands.
#[derive(Debug, Clone, Args)]
pub struct WindowArgs {
    /// Song duration in seconds
    #[arg(long, value_name = "SECS", allow_negative_numbers = true)]
    pub total: f64,

    /// Selection window in seconds (defaults to the configured length)
    #[arg(long, value_name = "SECS")]
    pub selection: Option<u32>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write a configuration file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
