//! Text formatting for session read-outs.

/// Format a normalized value as a percentage with one decimal.
///
/// # Arguments
/// * `ratio` - Value in `0.0..=1.0`
///
/// # Returns
/// A string like `"45.0%"`
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Format seconds as `m:ss`, rounding to the nearest second.
///
/// Negative input is shown as `0:00`.
pub fn format_clock_time(seconds: f64) -> String {
    let total = if seconds.is_finite() {
        seconds.round().max(0.0) as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}
