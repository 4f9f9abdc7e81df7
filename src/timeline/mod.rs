//! Key-time markers for a song.
//!
//! A `Timeline` holds the normalized positions (`0.0..=1.0`) the user can
//! tap to jump the selection window. Positions are clamped and sorted on
//! construction so consumers can rely on their order.

use serde::{Deserialize, Serialize};

/// Key times used when nothing else is configured.
pub const DEFAULT_KEY_TIMES: [f64; 5] = [0.1, 0.3, 0.45, 0.65, 0.85];

/// Normalized key-time markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTimeline", into = "RawTimeline")]
pub struct Timeline {
    length: f64,
    key_times: Vec<f64>,
}

#[derive(Serialize, Deserialize)]
struct RawTimeline {
    #[serde(default = "default_length")]
    length: f64,
    #[serde(default = "default_key_times")]
    key_times: Vec<f64>,
}

fn default_length() -> f64 {
    1.0
}

fn default_key_times() -> Vec<f64> {
    DEFAULT_KEY_TIMES.to_vec()
}

impl From<RawTimeline> for Timeline {
    fn from(raw: RawTimeline) -> Self {
        Timeline::new(raw.length, raw.key_times)
    }
}

impl From<Timeline> for RawTimeline {
    fn from(timeline: Timeline) -> Self {
        RawTimeline {
            length: timeline.length,
            key_times: timeline.key_times,
        }
    }
}

impl Timeline {
    /// Build a timeline, clamping every key time into `[0, 1]` and sorting.
    ///
    /// NaN key times are dropped.
    pub fn new(length: f64, key_times: impl IntoIterator<Item = f64>) -> Self {
        let mut key_times: Vec<f64> = key_times
            .into_iter()
            .filter(|t| !t.is_nan())
            .map(|t| t.clamp(0.0, 1.0))
            .collect();
        key_times.sort_by(f64::total_cmp);
        Self { length, key_times }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn key_times(&self) -> &[f64] {
        &self.key_times
    }

    pub fn key_time(&self, index: usize) -> Option<f64> {
        self.key_times.get(index).copied()
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(default_length(), DEFAULT_KEY_TIMES)
    }
}

/// Source of the timeline shown by a trimmer session.
pub trait TimelineRepository: Send + Sync {
    fn fetch_timeline(&self) -> Timeline;
}

/// Repository serving a fixed timeline from memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTimelineRepository {
    timeline: Timeline,
}

impl InMemoryTimelineRepository {
    pub fn new(timeline: Timeline) -> Self {
        Self { timeline }
    }
}

impl TimelineRepository for InMemoryTimelineRepository {
    fn fetch_timeline(&self) -> Timeline {
        self.timeline.clone()
    }
}
