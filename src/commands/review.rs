//! Review store subcommand handlers (ls / show / export / import /
//! rm / fix).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Local;

use avc::review::{export_json, import_json, repair_review, ReviewStore};

/// List stored reviews with record counts.
pub fn handle_ls(store: &ReviewStore) -> Result<()> {
    let ids = store.list()?;
    if ids.is_empty() {
        println!("No stored reviews in {}", store.dir().display());
        return Ok(());
    }

    for id in ids {
        match store.load(&id) {
            Ok(Some(review)) => {
                let matchup = if review.home_team_name.is_empty() && review.away_team_name.is_empty()
                {
                    String::new()
                } else {
                    format!("  {} vs {}", review.home_team_name, review.away_team_name)
                };
                println!(
                    "{}  {} record(s){}",
                    id,
                    review.periods.total_records(),
                    matchup
                );
            }
            Ok(None) => {}
            Err(e) => println!("{}  (unreadable: {})", id, e),
        }
    }
    Ok(())
}

/// Print a stored review as pretty JSON.
pub fn handle_show(store: &ReviewStore, video_id: &str) -> Result<()> {
    let review = store
        .load(video_id)?
        .with_context(|| format!("no stored review for video id {}", video_id))?;
    println!("{}", export_json(&review));
    Ok(())
}

/// Write a stored review to a JSON file.
pub fn handle_export(store: &ReviewStore, video_id: &str, output: Option<PathBuf>) -> Result<()> {
    let review = store
        .load(video_id)?
        .with_context(|| format!("no stored review for video id {}", video_id))?;

    let path = output.unwrap_or_else(|| default_export_name(video_id));
    fs::write(&path, export_json(&review))
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Exported review {} to {}", video_id, path.display());
    Ok(())
}

/// Validate a JSON file and store it under a video id.
///
/// A document that fails validation leaves the store untouched.
pub fn handle_import(store: &ReviewStore, video_id: &str, file: &Path) -> Result<()> {
    let raw =
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
    let review = match import_json(&raw) {
        Ok(review) => review,
        Err(e) => bail!("import rejected: {}", e),
    };

    store.save(video_id, &review)?;
    println!(
        "Imported {} record(s) for video id {}",
        review.periods.total_records(),
        video_id
    );
    Ok(())
}

/// Delete a stored review.
pub fn handle_rm(store: &ReviewStore, video_id: &str) -> Result<()> {
    if store.load(video_id)?.is_none() {
        bail!("no stored review for video id {}", video_id);
    }
    store.delete(video_id)?;
    println!("Deleted review {}", video_id);
    Ok(())
}

/// Repair an exported document: shift every record by the offset and
/// strip legacy fields.
pub fn handle_fix(input: &Path, output: Option<PathBuf>, offset: i64) -> Result<()> {
    let raw =
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))?;
    let (fixed, stats) = match repair_review(&raw, offset) {
        Ok(result) => result,
        Err(e) => bail!("cannot repair {}: {}", input.display(), e),
    };

    let path = output.unwrap_or_else(|| fixed_output_name(input));
    fs::write(&path, export_json(&fixed))
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!("Fixed data written to {}", path.display());
    println!(
        "  offset applied: {} seconds ({} min {} sec)",
        stats.offset,
        stats.offset / 60,
        stats.offset % 60
    );
    println!("  total records: {}", stats.total_records);
    println!(
        "  records with 'isConfirmed' removed: {}",
        stats.stripped_confirmed
    );
    Ok(())
}

/// `review_<id>_<yymmdd>_<HHMM>.json` in the current directory.
fn default_export_name(video_id: &str) -> PathBuf {
    let now = Local::now();
    PathBuf::from(format!(
        "review_{}_{}.json",
        video_id,
        now.format("%y%m%d_%H%M")
    ))
}

/// `<stem>-fixed.json` next to the input.
fn fixed_output_name(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("review");
    input.with_file_name(format!("{}-fixed.json", stem))
}
