//! Time string parsing and formatting.
//!
//! Converts between human-entered time strings and whole second counts:
//!
//! - `"90"` → 90 (raw seconds)
//! - `"1:30"` → 90 (`MM:SS`)
//! - `"1:15:30"` → 4530 (`HH:MM:SS`)
//! - `"1h15m30s"` → 4530 (duration shorthand, used by URL parameters)
//!
//! Parsing is strict: anything that does not match one of the accepted
//! shapes is rejected rather than guessed at. The display formatter is
//! the inverse for the seconds→string→seconds direction only; an input
//! like `"01:30"` parses to 90 but formats back as `"1:30"`.

use thiserror::Error;

/// Errors produced when a time string cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("time string is empty")]
    Empty,

    #[error("invalid time format: {input}")]
    InvalidFormat { input: String },

    #[error("time component out of range in: {input}")]
    ComponentOutOfRange { input: String },
}

/// Parse a colon- or digit-form time string into whole seconds.
///
/// Accepted shapes:
/// - digits only: a raw second count
/// - `MM:SS`: seconds must be `0..60`; minutes are unbounded, so
///   `"90:00"` is 5400 seconds
/// - `HH:MM:SS`: minutes and seconds must be `0..60`; hours unbounded
///
/// The `MM:SS` form deliberately leaves minutes unbounded while the
/// three-part form bounds them. Documents written by earlier versions
/// rely on that acceptance, so it is kept.
pub fn parse_time_string(input: &str) -> Result<u64, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }

    // Digits only: raw second count
    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        return trimmed
            .parse::<u64>()
            .map_err(|_| TimeParseError::InvalidFormat {
                input: trimmed.to_string(),
            });
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    match parts.len() {
        2 => {
            let minutes = parse_component(parts[0], trimmed)?;
            let seconds = parse_component(parts[1], trimmed)?;
            if seconds >= 60 {
                return Err(TimeParseError::ComponentOutOfRange {
                    input: trimmed.to_string(),
                });
            }
            // Unbounded minutes can overflow the total.
            minutes
                .checked_mul(60)
                .and_then(|m| m.checked_add(seconds))
                .ok_or_else(|| TimeParseError::ComponentOutOfRange {
                    input: trimmed.to_string(),
                })
        }
        3 => {
            let hours = parse_component(parts[0], trimmed)?;
            let minutes = parse_component(parts[1], trimmed)?;
            let seconds = parse_component(parts[2], trimmed)?;
            if minutes >= 60 || seconds >= 60 {
                return Err(TimeParseError::ComponentOutOfRange {
                    input: trimmed.to_string(),
                });
            }
            hours
                .checked_mul(3600)
                .and_then(|h| h.checked_add(minutes * 60 + seconds))
                .ok_or_else(|| TimeParseError::ComponentOutOfRange {
                    input: trimmed.to_string(),
                })
        }
        _ => Err(TimeParseError::InvalidFormat {
            input: trimmed.to_string(),
        }),
    }
}

/// Parse one colon-separated component as a non-negative integer.
fn parse_component(part: &str, whole: &str) -> Result<u64, TimeParseError> {
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
        return Err(TimeParseError::InvalidFormat {
            input: whole.to_string(),
        });
    }
    part.parse::<u64>()
        .map_err(|_| TimeParseError::InvalidFormat {
            input: whole.to_string(),
        })
}

/// Parse a duration shorthand like `"1h15m30s"`, `"1m30s"` or `"90s"`.
///
/// Each of the `h`/`m`/`s` groups is optional but they must appear in
/// that order with no other characters. A result of zero is rejected:
/// callers use this to distinguish "no usable value" from an explicit
/// zero, which can only be written in the digit or colon forms.
pub fn parse_human_duration(input: &str) -> Result<u64, TimeParseError> {
    let trimmed = input.trim().to_lowercase();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }

    let overflow = || TimeParseError::ComponentOutOfRange {
        input: trimmed.clone(),
    };

    let mut rest = trimmed.as_str();
    let mut total: u64 = 0;
    let mut matched_any = false;

    for unit in [('h', 3600u64), ('m', 60), ('s', 1)] {
        let (value, remainder) = take_group(rest, unit.0);
        if let Some(v) = value {
            let group = v.checked_mul(unit.1).ok_or_else(|| overflow())?;
            total = total.checked_add(group).ok_or_else(|| overflow())?;
            matched_any = true;
        }
        rest = remainder;
    }

    if !rest.is_empty() || !matched_any || total == 0 {
        return Err(TimeParseError::InvalidFormat {
            input: trimmed.to_string(),
        });
    }

    Ok(total)
}

/// Consume an optional `<digits><suffix>` group from the front of `s`.
///
/// Returns the parsed value (if the group was present) and the
/// remaining input. A digit run not followed by the expected suffix is
/// left untouched so the caller can reject it as trailing garbage.
fn take_group(s: &str, suffix: char) -> (Option<u64>, &str) {
    let digits_len = s.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits_len == 0 {
        return (None, s);
    }
    let after = &s[digits_len..];
    if !after.starts_with(suffix) {
        return (None, s);
    }
    match s[..digits_len].parse::<u64>() {
        Ok(v) => (Some(v), &after[suffix.len_utf8()..]),
        Err(_) => (None, s),
    }
}

/// Format whole seconds for display.
///
/// `H:MM:SS` when there is an hours component, `M:SS` otherwise. The
/// leading field is unpadded.
pub fn format_time(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}
