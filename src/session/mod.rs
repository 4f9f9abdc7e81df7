//! Trimmer session state
//!
//! `TrimmerSession` is the coordinator a front end talks to. It owns the
//! timeline, the selection bounds, the playback transport and its index
//! subscription, and derives everything a trimmer view displays: how many
//! seconds of the window are filled, where the playhead sits, and the
//! formatted percentages and timestamps.
//!
//! The session is pull-based: call `sync()` from the host loop to fold new
//! clock emissions into the session state.

pub mod format;

use std::sync::mpsc::Receiver;

use crate::playback::PlaybackControl;
use crate::selection::{
    ClampToBounds, ClampToUnit, JumpToKeyTime, SelectionBounds, SetStartPercent,
};
use crate::timeline::{Timeline, TimelineRepository};

use format::{format_clock_time, format_percent};

/// Selection window length used when none is configured.
pub const DEFAULT_SELECTION_SECS: u32 = 10;

/// Central state for one trimmer view.
pub struct TrimmerSession {
    // === Inputs ===
    repository: Box<dyn TimelineRepository>,
    set_start: Box<dyn SetStartPercent>,
    jump: Box<dyn JumpToKeyTime>,
    clock: Box<dyn PlaybackControl>,
    indices: Receiver<i64>,

    // === Parameters ===
    /// Song length in seconds (at least 1)
    song_duration_secs: f64,
    /// Window length in whole seconds (at least 1)
    selection_secs: u32,
    bounds: SelectionBounds,

    // === State ===
    timeline: Timeline,
    /// Window start, normalized to the song
    start_percent: f64,
    playing: bool,
    /// Seconds of the window already filled (`0..=selection_secs`)
    elapsed_secs: u32,
}

impl TrimmerSession {
    /// Create a session over `repository`'s timeline.
    ///
    /// # Arguments
    /// * `repository` - Source of key times
    /// * `song_duration_secs` - Song length, floored at 1 second
    /// * `selection_secs` - Window length in whole seconds, floored at 1
    /// * `clock` - Transport driving the fill
    pub fn new(
        repository: impl TimelineRepository + 'static,
        song_duration_secs: f64,
        selection_secs: u32,
        clock: impl PlaybackControl + 'static,
    ) -> Self {
        let song_duration_secs = if song_duration_secs.is_finite() {
            song_duration_secs.max(1.0)
        } else {
            1.0
        };
        let selection_secs = selection_secs.max(1);
        let indices = clock.subscribe();
        let timeline = repository.fetch_timeline();

        Self {
            repository: Box::new(repository),
            set_start: Box::new(ClampToUnit),
            jump: Box::new(ClampToBounds),
            clock: Box::new(clock),
            indices,
            song_duration_secs,
            selection_secs,
            bounds: SelectionBounds::new(song_duration_secs, f64::from(selection_secs)),
            timeline,
            start_percent: 0.0,
            playing: false,
            elapsed_secs: 0,
        }
    }

    /// Replace the drag and jump policies.
    pub fn with_policies(
        mut self,
        set_start: impl SetStartPercent + 'static,
        jump: impl JumpToKeyTime + 'static,
    ) -> Self {
        self.set_start = Box::new(set_start);
        self.jump = Box::new(jump);
        self
    }

    // === Timeline and selection ===

    /// Re-read the timeline from the repository.
    pub fn refresh_timeline(&mut self) {
        self.timeline = self.repository.fetch_timeline();
    }

    pub fn on_user_dragged_trimmer(&mut self, percent: f64) {
        let requested = self.set_start.execute(percent);
        self.start_percent = self.bounds.clamp(requested);
        tracing::debug!(requested = percent, start = self.start_percent, "trimmer dragged");
    }

    pub fn on_user_tapped_key_time(&mut self, key_percent: f64) {
        let requested = self
            .jump
            .execute(self.start_percent, key_percent, &self.bounds);
        self.start_percent = self.bounds.clamp(requested);
        tracing::debug!(key = key_percent, start = self.start_percent, "jumped to key time");
    }

    /// Jump to the key time at `index`. Returns false if there is none.
    pub fn jump_to_key(&mut self, index: usize) -> bool {
        match self.timeline.key_time(index) {
            Some(key) => {
                self.on_user_tapped_key_time(key);
                true
            }
            None => false,
        }
    }

    // === Transport ===

    /// Start or resume filling the window from the seconds already filled.
    ///
    /// The clock re-emits the current fill immediately and each further
    /// second one tick later, so an `N` second window takes `N` ticks.
    pub fn play(&mut self) {
        self.playing = true;
        self.clock.start(
            i64::from(self.elapsed_secs),
            i64::from(self.selection_secs) + 1,
        );
    }

    /// Stop filling and fold in everything the clock emitted before it stopped.
    pub fn pause(&mut self) {
        self.clock.pause();
        self.sync();
        self.playing = false;
    }

    pub fn toggle_play(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Stop and empty the window.
    pub fn reset(&mut self) {
        self.playing = false;
        self.clock.reset();
        self.elapsed_secs = 0;
    }

    /// Fold pending clock emissions into the session.
    ///
    /// Returns true if any emission was received.
    pub fn sync(&mut self) -> bool {
        let mut changed = false;
        while let Ok(index) = self.indices.try_recv() {
            self.apply_index(index);
            changed = true;
        }
        changed
    }

    fn apply_index(&mut self, index: i64) {
        // Index k means k seconds filled
        let filled = index.clamp(0, i64::from(self.selection_secs));
        // Bounded by selection_secs, which is a u32
        self.elapsed_secs = u32::try_from(filled).unwrap_or(self.selection_secs);
        if self.elapsed_secs >= self.selection_secs {
            self.playing = false;
        }
    }

    // === Accessors ===

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn bounds(&self) -> &SelectionBounds {
        &self.bounds
    }

    pub fn song_duration_secs(&self) -> f64 {
        self.song_duration_secs
    }

    pub fn selection_secs(&self) -> u32 {
        self.selection_secs
    }

    pub fn start_percent(&self) -> f64 {
        self.start_percent
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    /// True once the whole window has been filled.
    pub fn is_complete(&self) -> bool {
        self.elapsed_secs >= self.selection_secs
    }

    // === Derived positions ===

    /// Window length as a fraction of the song.
    pub fn selection_length_normalized(&self) -> f64 {
        self.bounds.selection_ratio()
    }

    pub fn selection_start_percent(&self) -> f64 {
        clamp01(self.start_percent)
    }

    pub fn selection_end_percent(&self) -> f64 {
        clamp01(self.start_percent + self.selection_length_normalized())
    }

    /// Filled fraction of the window.
    pub fn progress_ratio(&self) -> f64 {
        (f64::from(self.elapsed_secs) / f64::from(self.selection_secs)).min(1.0)
    }

    pub fn has_progress(&self) -> bool {
        self.elapsed_secs > 0
    }

    /// Playhead position: the window start until something is filled, then
    /// start plus progress across the window.
    pub fn current_percent(&self) -> f64 {
        let start = self.selection_start_percent();
        if self.has_progress() {
            clamp01(start + self.progress_ratio() * self.selection_length_normalized())
        } else {
            start
        }
    }

    pub fn selection_start_time_secs(&self) -> f64 {
        self.selection_start_percent() * self.song_duration_secs
    }

    pub fn selection_end_time_secs(&self) -> f64 {
        self.selection_end_percent() * self.song_duration_secs
    }

    pub fn current_time_secs(&self) -> f64 {
        self.current_percent() * self.song_duration_secs
    }

    // === Formatted text ===

    /// `"start% - end%"`
    pub fn selection_percent_text(&self) -> String {
        format!(
            "{} - {}",
            format_percent(self.selection_start_percent()),
            format_percent(self.selection_end_percent())
        )
    }

    pub fn current_percent_text(&self) -> String {
        format_percent(self.current_percent())
    }

    /// `"m:ss -> m:ss"`
    pub fn selection_time_text(&self) -> String {
        format!(
            "{} -> {}",
            format_clock_time(self.selection_start_time_secs()),
            format_clock_time(self.selection_end_time_secs())
        )
    }

    pub fn current_time_text(&self) -> String {
        format_clock_time(self.current_time_secs())
    }
}

fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
