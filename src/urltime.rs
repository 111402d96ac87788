//! Start-time URL parameter handling.
//!
//! Deep links carry an optional `t` query parameter holding either a
//! colon/digit time string (`?t=90`, `?t=1:30`) or a duration
//! shorthand (`?t=1h15m30s`). Resolution never fails: an unusable
//! value is simply treated as absent.

use tracing::debug;

use crate::timecode::{parse_human_duration, parse_time_string};

/// Query parameter name for the start time.
const TIME_PARAM: &str = "t";

/// Resolve a raw `t` parameter value into whole seconds.
///
/// Tries the colon/digit forms first, then the `1h15m30s` shorthand.
/// `None` in, `None` out; garbage in, `None` out.
pub fn resolve_start_time(query_value: Option<&str>) -> Option<u64> {
    let value = query_value?;
    parse_time_string(value)
        .or_else(|_| parse_human_duration(value))
        .ok()
}

/// Extract and resolve the start time from a full URL string.
pub fn start_time_from_url(url: &str) -> Option<u64> {
    let seconds = resolve_start_time(query_param(url, TIME_PARAM));
    if let Some(s) = seconds {
        debug!(url, seconds = s, "start time resolved from URL");
    }
    seconds
}

/// Return `url` with the `t` parameter set to `seconds`.
///
/// Replaces an existing `t`, preserves every other parameter and the
/// fragment. Used to build shareable deep links into a broadcast.
pub fn with_start_time(url: &str, seconds: u64) -> String {
    let (base, fragment) = match url.find('#') {
        Some(pos) => (&url[..pos], Some(&url[pos..])),
        None => (url, None),
    };

    let (path, query) = match base.find('?') {
        Some(pos) => (&base[..pos], &base[pos + 1..]),
        None => (base, ""),
    };

    let mut pairs: Vec<String> = query
        .split('&')
        .filter(|p| !p.is_empty() && param_key(p) != TIME_PARAM)
        .map(|p| p.to_string())
        .collect();
    pairs.push(format!("{}={}", TIME_PARAM, seconds));

    let mut result = format!("{}?{}", path, pairs.join("&"));
    if let Some(fragment) = fragment {
        result.push_str(fragment);
    }
    result
}

/// Find the first occurrence of a query parameter in a URL string.
fn query_param<'a>(url: &'a str, name: &str) -> Option<&'a str> {
    let base = url.split('#').next().unwrap_or(url);
    let query = match base.find('?') {
        Some(pos) => &base[pos + 1..],
        None => return None,
    };

    for pair in query.split('&') {
        if param_key(pair) == name {
            return Some(match pair.find('=') {
                Some(eq) => &pair[eq + 1..],
                None => "",
            });
        }
    }
    None
}

/// Key part of a `key=value` query pair.
fn param_key(pair: &str) -> &str {
    pair.split('=').next().unwrap_or(pair)
}
