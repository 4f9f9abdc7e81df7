//! Legal range for the selection start.

/// Shortest song the bounds will reason about, in seconds.
const MIN_TOTAL_SECS: f64 = 1.0;
/// Shortest selection window, in seconds.
const MIN_SELECTION_SECS: f64 = 0.1;

/// Boundary rules for the normalized selection start.
///
/// A value object: build a new one whenever the song or window duration
/// changes. Durations below their minimums (zero, negative, non-finite)
/// are floored before any ratio is computed, so `selection_ratio` is
/// always in `(0, 1]` and `max_start` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionBounds {
    total_duration_secs: f64,
    selection_duration_secs: f64,
}

impl SelectionBounds {
    /// Create bounds for a song of `total_duration_secs` with a fixed
    /// window of `selection_duration_secs`.
    pub fn new(total_duration_secs: f64, selection_duration_secs: f64) -> Self {
        Self {
            total_duration_secs: floor_at(total_duration_secs, MIN_TOTAL_SECS),
            selection_duration_secs: floor_at(selection_duration_secs, MIN_SELECTION_SECS),
        }
    }

    /// Song duration after flooring.
    pub fn total_duration_secs(&self) -> f64 {
        self.total_duration_secs
    }

    /// Window duration after flooring.
    pub fn selection_duration_secs(&self) -> f64 {
        self.selection_duration_secs
    }

    /// Fraction of the song covered by the window.
    pub fn selection_ratio(&self) -> f64 {
        (self.selection_duration_secs / self.total_duration_secs).min(1.0)
    }

    /// Largest start that keeps the window's right edge inside the song.
    pub fn max_start(&self) -> f64 {
        (1.0 - self.selection_ratio()).max(0.0)
    }

    /// Map any requested start into `[0, max_start]`.
    ///
    /// NaN requests land on `0.0`.
    pub fn clamp(&self, target_percent: f64) -> f64 {
        let base = clamp_unit(target_percent);
        base.min(self.max_start()).max(0.0)
    }
}

/// Clamp to `[0, 1]`, sending NaN to 0.
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn floor_at(value: f64, min: f64) -> f64 {
    if value.is_finite() {
        value.max(min)
    } else {
        min
    }
}
