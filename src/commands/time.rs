//! Time conversion subcommand handler.

use anyhow::{bail, Result};

use avc::timecode::format_time;
use avc::urltime::resolve_start_time;

/// Parse a time value (colon form, raw seconds, or `1h15m30s`
/// shorthand) and print both the second count and display form.
pub fn handle_time(value: &str) -> Result<()> {
    let Some(seconds) = resolve_start_time(Some(value)) else {
        bail!(
            "unrecognized time value {:?} (expected SS, MM:SS, HH:MM:SS or 1h15m30s)",
            value
        );
    };
    println!("{} ({})", seconds, format_time(seconds));
    Ok(())
}
