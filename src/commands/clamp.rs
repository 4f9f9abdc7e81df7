//! Clamp subcommand handler

use anyhow::Result;

use trimr::cli::WindowArgs;
use trimr::{Config, SelectionBounds};

use super::Window;

/// Print the legal start for `percent`.
///
/// With `verbose`, the window ratio and right edge are printed too.
pub fn handle_clamp(percent: f64, args: &WindowArgs, verbose: bool) -> Result<()> {
    let config = Config::load()?;
    let window = Window::resolve(args, &config);
    let bounds = SelectionBounds::new(window.total_secs, f64::from(window.selection_secs));

    let start = bounds.clamp(percent);
    tracing::debug!(requested = percent, start, max_start = bounds.max_start(), "clamped");

    println!("{:.4}", start);
    if verbose {
        println!("selection ratio: {:.4}", bounds.selection_ratio());
        println!("max start:       {:.4}", bounds.max_start());
    }
    Ok(())
}
