//! Game review data model.
//!
//! A review is a set of timestamped comments bucketed into the four
//! game periods, plus a little game metadata. Documents are serialized
//! as camelCase JSON so files written by earlier versions of the tool
//! load unchanged; stray legacy fields (notably `isConfirmed`) are
//! ignored on read and never written back.

pub mod editor;
pub mod fix;
pub mod import;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use editor::{EditorState, ViewMode};
pub use fix::{repair_review, FixStats, DEFAULT_FIX_OFFSET};
pub use import::{export_json, import_json, ImportError};
pub use storage::{extract_video_id, ReviewStore, StorageError};

/// One of the four fixed game periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1")]
    First,
    #[serde(rename = "2")]
    Second,
    #[serde(rename = "3")]
    Third,
    #[serde(rename = "4")]
    Fourth,
}

impl Period {
    /// All periods in game order.
    pub const ALL: [Period; 4] = [Period::First, Period::Second, Period::Third, Period::Fourth];

    /// The JSON object key for this period ("1".."4").
    pub fn key(&self) -> &'static str {
        match self {
            Period::First => "1",
            Period::Second => "2",
            Period::Third => "3",
            Period::Fourth => "4",
        }
    }

    fn index(&self) -> usize {
        match self {
            Period::First => 0,
            Period::Second => 1,
            Period::Third => 2,
            Period::Fourth => 3,
        }
    }
}

impl Default for Period {
    fn default() -> Self {
        Period::First
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}Q", self.key())
    }
}

/// Which team a comment concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HomeAway {
    #[serde(rename = "HOME")]
    Home,
    #[serde(rename = "AWAY")]
    Away,
}

/// A confirmed comment tied to a playback second.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    /// Playback position in whole seconds.
    pub video_sec: u64,
    /// Remaining game clock ("MM:SS") if the user noted it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_game_clock: Option<String>,
    pub comment: String,
    pub home_away: HomeAway,
}

/// Game metadata entered in the sidebar header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInfo {
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub home_team_name: String,
    #[serde(default)]
    pub away_team_name: String,
}

/// Records for all four periods, keyed "1".."4" in JSON.
///
/// All four keys are always written, even when empty, matching the
/// documents earlier sidebar builds produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodMap {
    #[serde(rename = "1", default)]
    q1: Vec<CommentRecord>,
    #[serde(rename = "2", default)]
    q2: Vec<CommentRecord>,
    #[serde(rename = "3", default)]
    q3: Vec<CommentRecord>,
    #[serde(rename = "4", default)]
    q4: Vec<CommentRecord>,
}

impl PeriodMap {
    pub fn get(&self, period: Period) -> &Vec<CommentRecord> {
        [&self.q1, &self.q2, &self.q3, &self.q4][period.index()]
    }

    pub fn get_mut(&mut self, period: Period) -> &mut Vec<CommentRecord> {
        [&mut self.q1, &mut self.q2, &mut self.q3, &mut self.q4][period.index()]
    }

    /// Iterate periods in game order with their records.
    pub fn iter(&self) -> impl Iterator<Item = (Period, &Vec<CommentRecord>)> {
        Period::ALL.iter().map(move |p| (*p, self.get(*p)))
    }

    pub fn total_records(&self) -> usize {
        Period::ALL.iter().map(|p| self.get(*p).len()).sum()
    }
}

/// A complete per-video review document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameReview {
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub home_team_name: String,
    #[serde(default)]
    pub away_team_name: String,
    pub periods: PeriodMap,
}

impl GameReview {
    /// Assemble a document from editor parts.
    pub fn new(info: GameInfo, periods: PeriodMap) -> Self {
        Self {
            game_id: info.game_id,
            home_team_name: info.home_team_name,
            away_team_name: info.away_team_name,
            periods,
        }
    }

    /// The metadata fields as a [`GameInfo`].
    pub fn info(&self) -> GameInfo {
        GameInfo {
            game_id: self.game_id.clone(),
            home_team_name: self.home_team_name.clone(),
            away_team_name: self.away_team_name.clone(),
        }
    }
}
