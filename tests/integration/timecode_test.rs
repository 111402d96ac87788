//! Integration tests for time parsing, formatting, and URL resolution.

use avc::timecode::{format_time, parse_human_duration, parse_time_string};
use avc::urltime::{resolve_start_time, start_time_from_url, with_start_time};

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn parses_all_documented_forms() {
    assert_eq!(parse_time_string("1:30"), Ok(90));
    assert_eq!(parse_time_string("1:15:30"), Ok(4530));
    assert_eq!(parse_time_string("90"), Ok(90));
}

#[test]
fn rejects_all_documented_invalid_forms() {
    assert!(parse_time_string("invalid").is_err());
    assert!(parse_time_string("").is_err());
    assert!(parse_time_string("1:60").is_err());
    assert!(parse_time_string("1:2:3:4").is_err());
    // Shape-valid inputs whose totals exceed u64 seconds fail cleanly.
    assert!(parse_time_string("307445734561825861:00").is_err());
    assert!(parse_human_duration("9223372036854775807h").is_err());
}

#[test]
fn duration_shorthand_matches_colon_forms() {
    assert_eq!(parse_human_duration("1h15m30s"), Ok(4530));
    assert_eq!(parse_human_duration("90s"), Ok(90));
    assert!(parse_human_duration("").is_err());
    assert!(parse_human_duration("xyz").is_err());
}

// ============================================================================
// Formatting
// ============================================================================

#[test]
fn formats_documented_values() {
    assert_eq!(format_time(90), "1:30");
    assert_eq!(format_time(4530), "1:15:30");
    assert_eq!(format_time(0), "0:00");
}

#[test]
fn every_second_of_a_day_round_trips() {
    for s in 0..86400u64 {
        assert_eq!(
            parse_time_string(&format_time(s)),
            Ok(s),
            "round-trip failed at {} seconds",
            s
        );
    }
}

// ============================================================================
// URL start time
// ============================================================================

#[test]
fn url_parameter_resolution_never_errors() {
    assert_eq!(resolve_start_time(Some("1:30")), Some(90));
    assert_eq!(resolve_start_time(None), None);
    assert_eq!(resolve_start_time(Some("garbage")), None);
}

#[test]
fn deep_link_round_trips() {
    let url = with_start_time("https://basketball.example.jp/lives/505589?quality=hd", 4530);
    assert_eq!(start_time_from_url(&url), Some(4530));
    assert!(url.contains("quality=hd"));
}
