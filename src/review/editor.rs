//! Annotation editor state.
//!
//! The sidebar owns one [`EditorState`] and passes it down; there are
//! no module-level singletons. A capture starts life as a pending
//! (unconfirmed) playback second, becomes a frozen [`CommentRecord`]
//! on confirmation, and is only ever removed explicitly.
//!
//! Persistence is driven by dirty-tracking: loading a stored document
//! never marks the state dirty, so a load is never echoed straight
//! back as a save. Pending captures are session-local and do not
//! persist either; only confirmed records and game metadata do.

use std::collections::BTreeMap;

use crate::review::{CommentRecord, GameInfo, GameReview, Period, PeriodMap};

/// Which sidebar pane is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Editor,
    Json,
}

/// Mutable state behind the review sidebar.
#[derive(Debug, Default)]
pub struct EditorState {
    selected_period: Period,
    view_mode: ViewMode,
    records: PeriodMap,
    /// Captured playback seconds not yet confirmed, per period.
    pending: BTreeMap<Period, Vec<u64>>,
    info: GameInfo,
    /// Initial load finished (or was skipped because nothing existed).
    loaded: bool,
    /// Persistable state changed since the last save.
    dirty: bool,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_period(&self) -> Period {
        self.selected_period
    }

    pub fn select_period(&mut self, period: Period) {
        self.selected_period = period;
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn records(&self, period: Period) -> &[CommentRecord] {
        self.records.get(period)
    }

    pub fn pending(&self, period: Period) -> &[u64] {
        self.pending.get(&period).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn game_info(&self) -> &GameInfo {
        &self.info
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Capture the current playback position as a pending record in
    /// the selected period. Fractional positions floor to whole
    /// seconds; negative reports from a confused player floor to 0.
    pub fn capture(&mut self, current_time: f64) -> u64 {
        let video_sec = current_time.max(0.0).floor() as u64;
        self.pending
            .entry(self.selected_period)
            .or_default()
            .push(video_sec);
        video_sec
    }

    /// Freeze a pending capture into a confirmed record.
    ///
    /// Removes the first pending entry for `video_sec` in the selected
    /// period and appends `record` to that period's confirmed list.
    pub fn confirm(&mut self, video_sec: u64, record: CommentRecord) {
        if let Some(list) = self.pending.get_mut(&self.selected_period) {
            if let Some(pos) = list.iter().position(|&s| s == video_sec) {
                list.remove(pos);
            }
        }
        self.records.get_mut(self.selected_period).push(record);
        self.mark_changed();
    }

    /// Drop a pending capture without confirming it.
    pub fn discard_pending(&mut self, video_sec: u64) {
        if let Some(list) = self.pending.get_mut(&self.selected_period) {
            if let Some(pos) = list.iter().position(|&s| s == video_sec) {
                list.remove(pos);
            }
        }
    }

    /// Delete a confirmed record from the selected period by index.
    pub fn delete_record(&mut self, index: usize) -> Option<CommentRecord> {
        let list = self.records.get_mut(self.selected_period);
        if index >= list.len() {
            return None;
        }
        let removed = list.remove(index);
        self.mark_changed();
        Some(removed)
    }

    pub fn set_game_info(&mut self, info: GameInfo) {
        self.info = info;
        self.mark_changed();
    }

    /// Seek target handed to the playback controller when a recorded
    /// timestamp is clicked.
    pub fn jump_target(record: &CommentRecord) -> f64 {
        record.video_sec as f64
    }

    /// Adopt a stored document as the initial state.
    ///
    /// Marks the state loaded, not dirty: the caller must never save
    /// what it just loaded.
    pub fn load_from(&mut self, review: GameReview) {
        self.info = review.info();
        self.records = review.periods;
        self.loaded = true;
        self.dirty = false;
    }

    /// Note that loading finished with nothing stored.
    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    /// Replace all records and metadata with an imported document.
    pub fn import(&mut self, review: GameReview) {
        self.info = review.info();
        self.records = review.periods;
        self.mark_changed();
    }

    /// Snapshot the persistable state as a document.
    pub fn to_review(&self) -> GameReview {
        GameReview::new(self.info.clone(), self.records.clone())
    }

    /// Take the pending save, if any.
    ///
    /// Returns a snapshot when persistable state changed since the
    /// last call (and after the initial load), clearing the flag.
    pub fn take_dirty(&mut self) -> Option<GameReview> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        Some(self.to_review())
    }

    // Changes made before the initial load completes must not trigger
    // a save that could clobber the stored document.
    fn mark_changed(&mut self) {
        if self.loaded {
            self.dirty = true;
        }
    }
}
