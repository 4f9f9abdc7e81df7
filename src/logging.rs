//! Tracing subscriber setup for the binary.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Environment variable holding the log filter (falls back to `RUST_LOG`).
pub const LOG_ENV: &str = "TRIMR_LOG";

/// Install the global subscriber, writing to stderr.
///
/// `TRIMR_LOG`/`RUST_LOG` take precedence over `verbose`. Returns false if
/// a global subscriber was already installed.
pub fn init_logging(verbose: bool) -> bool {
    let configured = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(build_filter(configured.as_deref(), verbose))
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).is_ok()
}

/// Filter from an explicit directive string, or the verbosity default.
///
/// An unparsable directive falls back to `warn`.
fn build_filter(configured: Option<&str>, verbose: bool) -> EnvFilter {
    match configured {
        Some(value) => EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("warn")),
        None if verbose => EnvFilter::new("debug"),
        None => EnvFilter::new("warn"),
    }
}
