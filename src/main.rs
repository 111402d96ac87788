//! avc - video review controller CLI.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

use avc::review::{ReviewStore, DEFAULT_FIX_OFFSET};
use avc::Config;

#[derive(Parser)]
#[command(
    name = "avc",
    version,
    about = "Video review controller - game review annotation store and repair tooling"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List stored reviews
    Ls,
    /// Print a stored review as pretty JSON
    Show {
        /// Video id (digits from the /lives/<id> URL)
        video_id: String,
    },
    /// Write a stored review to a JSON file
    Export {
        video_id: String,
        /// Output file (default: review_<id>_<date>_<time>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a JSON document and store it under a video id
    Import {
        video_id: String,
        /// JSON file to import
        file: PathBuf,
    },
    /// Delete a stored review
    Rm { video_id: String },
    /// Shift record timestamps by an offset and strip legacy fields
    Fix {
        /// Exported review JSON to repair
        input: PathBuf,
        /// Output file (default: <input>-fixed.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Seconds of pre-game footage to subtract
        #[arg(long, default_value_t = DEFAULT_FIX_OFFSET, allow_hyphen_values = true)]
        offset: i64,
    },
    /// Convert a time value between string and second forms
    Time {
        /// SS, MM:SS, HH:MM:SS or 1h15m30s
        value: String,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Open the configuration file in $EDITOR
    Edit,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ls => commands::review::handle_ls(&open_store()?),
        Commands::Show { video_id } => commands::review::handle_show(&open_store()?, &video_id),
        Commands::Export { video_id, output } => {
            commands::review::handle_export(&open_store()?, &video_id, output)
        }
        Commands::Import { video_id, file } => {
            commands::review::handle_import(&open_store()?, &video_id, &file)
        }
        Commands::Rm { video_id } => commands::review::handle_rm(&open_store()?, &video_id),
        Commands::Fix {
            input,
            output,
            offset,
        } => commands::review::handle_fix(&input, output, offset),
        Commands::Time { value } => commands::time::handle_time(&value),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Path => commands::config::handle_path(),
            ConfigAction::Edit => commands::config::handle_edit(),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "avc", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Open the review store at the configured (or default) location.
///
/// `AVC_REVIEW_DIR` overrides both, which the integration tests rely
/// on to avoid touching the real store.
fn open_store() -> Result<ReviewStore> {
    if let Ok(dir) = std::env::var("AVC_REVIEW_DIR") {
        return Ok(ReviewStore::new(dir));
    }
    let config = Config::load().unwrap_or_default();
    if let Some(dir) = config.storage.dir {
        return Ok(ReviewStore::new(dir));
    }
    Ok(ReviewStore::open_default()?)
}
