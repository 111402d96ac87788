//! Offset repair for exported review documents.
//!
//! Broadcasts sometimes include pre-game footage, leaving every
//! recorded `videoSec` shifted by a constant amount relative to the
//! trimmed VOD. This transform subtracts that offset from every record
//! and cleans legacy fields (`isConfirmed`) left behind by early
//! versions of the sidebar.

use serde_json::Value;

use crate::review::import::{import_json, ImportError};
use crate::review::{GameReview, Period};

/// Offset observed on the original broadcast data: 2 hours and 23
/// seconds of pre-game footage.
pub const DEFAULT_FIX_OFFSET: i64 = 7223;

/// What a repair run did, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixStats {
    /// Seconds subtracted from every record.
    pub offset: i64,
    /// Records processed across all periods.
    pub total_records: usize,
    /// Records that carried the legacy `isConfirmed` field.
    pub stripped_confirmed: usize,
}

/// Parse a raw document, subtract `offset` from every record's
/// `videoSec`, and strip legacy fields.
///
/// Positions never go negative: a record earlier than the offset
/// floors at zero. The input passes the same validation as a pasted
/// import.
pub fn repair_review(raw: &str, offset: i64) -> Result<(GameReview, FixStats), ImportError> {
    let stripped_confirmed = count_confirmed_flags(raw);

    // The typed decode drops unknown fields, which is the strip.
    let mut review = import_json(raw)?;

    let mut total_records = 0;
    for period in Period::ALL {
        for record in review.periods.get_mut(period) {
            record.video_sec = shift_floor(record.video_sec, offset);
            total_records += 1;
        }
    }

    Ok((
        review,
        FixStats {
            offset,
            total_records,
            stripped_confirmed,
        },
    ))
}

fn shift_floor(video_sec: u64, offset: i64) -> u64 {
    (video_sec as i64).saturating_sub(offset).max(0) as u64
}

/// Count records carrying the legacy `isConfirmed` marker.
///
/// Only the four canonical period keys are counted; stray keys are
/// dropped by the typed decode and never stripped, so they must not
/// inflate the report.
fn count_confirmed_flags(raw: &str) -> usize {
    let Ok(value) = serde_json::from_str::<Value>(raw) else {
        return 0;
    };
    let Some(periods) = value.get("periods").and_then(Value::as_object) else {
        return 0;
    };

    Period::ALL
        .iter()
        .filter_map(|period| periods.get(period.key()))
        .filter_map(Value::as_array)
        .flatten()
        .filter(|record| record.get("isConfirmed").is_some())
        .count()
}
