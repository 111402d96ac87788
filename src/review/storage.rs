//! Persisted review documents, one per video.
//!
//! Earlier in-browser builds kept documents under
//! `avc_review:<video id>` localStorage keys; here the namespace is a
//! directory and each video id gets a `<id>.json` file. Storage failures are typed so callers
//! can log them and carry on in memory - an unavailable store must
//! never end an annotation session.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::review::GameReview;

/// URL path segment that precedes the video id.
const LIVES_SEGMENT: &str = "/lives/";

/// Errors raised by the review store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no platform data directory available")]
    NoDataDir,

    #[error("invalid video id: {video_id:?}")]
    InvalidVideoId { video_id: String },

    #[error("failed to create store directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("stored document {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Extract the video id from a broadcast page URL.
///
/// The id is the run of digits directly following `/lives/`, e.g.
/// `https://example.com/lives/505589?t=90` → `"505589"`.
pub fn extract_video_id(url: &str) -> Option<String> {
    let start = url.find(LIVES_SEGMENT)? + LIVES_SEGMENT.len();
    let digits: String = url[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

/// Directory-backed store of review documents keyed by video id.
#[derive(Debug, Clone)]
pub struct ReviewStore {
    dir: PathBuf,
}

impl ReviewStore {
    /// Open a store rooted at the given directory. The directory is
    /// created lazily on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Open the store at the platform default location
    /// (`<data dir>/avc/reviews`).
    pub fn open_default() -> Result<Self, StorageError> {
        let base = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        Ok(Self::new(base.join("avc").join("reviews")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist a document for a video, pretty-printed.
    pub fn save(&self, video_id: &str, review: &GameReview) -> Result<(), StorageError> {
        let path = self.document_path(video_id)?;
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let json = serde_json::to_string_pretty(review).unwrap();
        fs::write(&path, json).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })?;
        debug!(video_id, path = %path.display(), "review saved");
        Ok(())
    }

    /// Load the document for a video. `Ok(None)` when nothing is
    /// stored yet.
    pub fn load(&self, video_id: &str) -> Result<Option<GameReview>, StorageError> {
        let path = self.document_path(video_id)?;
        if !path.exists() {
            debug!(video_id, "no stored review");
            return Ok(None);
        }

        let data = fs::read_to_string(&path).map_err(|source| StorageError::Read {
            path: path.clone(),
            source,
        })?;
        let review =
            serde_json::from_str(&data).map_err(|source| StorageError::Corrupt { path, source })?;
        debug!(video_id, "review loaded");
        Ok(Some(review))
    }

    /// Video ids with a stored document, sorted.
    pub fn list(&self) -> Result<Vec<String>, StorageError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir).map_err(|source| StorageError::Read {
            path: self.dir.clone(),
            source,
        })?;

        let mut ids = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                // Only digit-run stems can be store documents; see
                // document_path. Stray files are not ours to report.
                if !stem.is_empty() && stem.chars().all(|c| c.is_ascii_digit()) {
                    ids.push(stem.to_string());
                }
            }
        }
        ids.sort();
        Ok(ids)
    }

    /// Delete a stored document. Deleting a missing document is fine.
    pub fn delete(&self, video_id: &str) -> Result<(), StorageError> {
        let path = self.document_path(video_id)?;
        if path.exists() {
            fs::remove_file(&path).map_err(|source| StorageError::Write {
                path: path.clone(),
                source,
            })?;
            debug!(video_id, "review deleted");
        }
        Ok(())
    }

    fn document_path(&self, video_id: &str) -> Result<PathBuf, StorageError> {
        // Ids come from URLs or the command line; anything that is not
        // a plain digit run must not become a path component.
        if video_id.is_empty() || !video_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(StorageError::InvalidVideoId {
                video_id: video_id.to_string(),
            });
        }
        Ok(self.dir.join(format!("{}.json", video_id)))
    }
}
