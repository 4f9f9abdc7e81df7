//! Start-percent policies for user gestures.
//!
//! Dragging the trimmer and tapping a key-time marker both produce a
//! requested start. Every policy result is passed through
//! `SelectionBounds::clamp` by the caller, so a policy only has to express
//! intent (snapping, easing) and never needs to know the legal range.

use super::bounds::{clamp_unit, SelectionBounds};

/// Turns a dragged position into a requested normalized start.
pub trait SetStartPercent: Send + Sync {
    fn execute(&self, percent: f64) -> f64;
}

/// Computes the new start when the user taps a key time.
pub trait JumpToKeyTime: Send + Sync {
    /// `current_start` is the start before the jump, for strategies that
    /// animate or snap relative to it.
    fn execute(&self, current_start: f64, target_key_percent: f64, bounds: &SelectionBounds)
        -> f64;
}

/// Drag policy that only keeps the value inside `[0, 1]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClampToUnit;

impl SetStartPercent for ClampToUnit {
    fn execute(&self, percent: f64) -> f64 {
        clamp_unit(percent)
    }
}

/// Jump policy that moves the window's left edge straight onto the key.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClampToBounds;

impl JumpToKeyTime for ClampToBounds {
    fn execute(
        &self,
        _current_start: f64,
        target_key_percent: f64,
        bounds: &SelectionBounds,
    ) -> f64 {
        bounds.clamp(target_key_percent)
    }
}
