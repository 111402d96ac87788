//! JSON import and export for review documents.
//!
//! Export is pretty-printed JSON for display and copy-paste. Import
//! accepts pasted JSON back and validates only the minimum needed to
//! keep the editor consistent: a `periods` object must exist, and each
//! of the four period keys, when present, must hold an array. Any
//! other shape is rejected with a message; the caller keeps whatever
//! state it had.

use serde_json::Value;
use thiserror::Error;

use crate::review::{GameReview, Period};

/// Why a pasted document was rejected.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("not valid JSON: {0}")]
    NotJson(#[from] serde_json::Error),

    #[error("document must be a JSON object")]
    NotAnObject,

    #[error("document has no \"periods\" field")]
    MissingPeriods,

    #[error("\"periods\" must be an object keyed by period")]
    PeriodsNotObject,

    #[error("period \"{period}\" must be an array of records")]
    PeriodNotArray { period: &'static str },

    #[error("malformed record: {0}")]
    MalformedRecord(serde_json::Error),
}

/// Serialize a review document as pretty JSON.
pub fn export_json(review: &GameReview) -> String {
    serde_json::to_string_pretty(review).unwrap()
}

/// Parse and validate a pasted review document.
///
/// Unknown fields (including the legacy `isConfirmed` marker) survive
/// validation and are dropped by the typed decode.
pub fn import_json(input: &str) -> Result<GameReview, ImportError> {
    let value: Value = serde_json::from_str(input)?;

    let object = value.as_object().ok_or(ImportError::NotAnObject)?;
    let periods = object.get("periods").ok_or(ImportError::MissingPeriods)?;
    let periods = periods.as_object().ok_or(ImportError::PeriodsNotObject)?;

    for period in Period::ALL {
        if let Some(entry) = periods.get(period.key()) {
            if !entry.is_array() {
                return Err(ImportError::PeriodNotArray {
                    period: period.key(),
                });
            }
        }
    }

    serde_json::from_value(value).map_err(ImportError::MalformedRecord)
}
