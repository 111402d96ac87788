//! TOML configuration.
//!
//! Lives at `<config dir>/avc/config.toml`. Every field has a default
//! so a missing or partial file always loads; unknown keys are
//! ignored. The sections mirror the tunable parts of the core: the
//! assumed frame rate, discovery polling, skip step sizes, and the
//! review store location.
//!
//! The CLI itself only reads `[storage]`. The other sections belong to
//! host glue embedding the library against a live player: it hands
//! `detection_config()` to [`detect_player`](crate::player::detect_player),
//! `skip_steps()` to [`map_key_event`](crate::player::map_key_event),
//! and `player.fps` to
//! [`PlaybackController::with_fps`](crate::player::PlaybackController::with_fps).

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::player::detect::DetectionConfig;
use crate::player::input::SkipSteps;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub detection: DetectionSection,
    pub controls: ControlsConfig,
    pub storage: StorageConfig,
}

/// `[player]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Assumed frame rate for single-frame stepping.
    pub fps: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { fps: 30.0 }
    }
}

/// `[detection]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionSection {
    /// Maximum probe attempts before giving up.
    pub max_retries: u32,
    /// Milliseconds between probe attempts.
    pub retry_delay_ms: u64,
    /// Total milliseconds to wait for a usable duration.
    pub ready_timeout_ms: u64,
    /// Milliseconds between duration checks.
    pub ready_poll_ms: u64,
}

impl Default for DetectionSection {
    fn default() -> Self {
        Self {
            max_retries: 20,
            retry_delay_ms: 500,
            ready_timeout_ms: 5000,
            ready_poll_ms: 100,
        }
    }
}

/// `[controls]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Plain arrow skip, seconds.
    pub skip_step: f64,
    /// Shift+arrow skip, seconds.
    pub fine_skip_step: f64,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            skip_step: 1.0,
            fine_skip_step: 0.5,
        }
    }
}

/// `[storage]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Review store directory; platform data dir when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Path to the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("no platform config directory available")?;
        Ok(base.join("avc").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it does
    /// not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    /// Write the config file, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&path, toml_str)
            .with_context(|| format!("failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// The `[detection]` section as the core's polling config.
    pub fn detection_config(&self) -> DetectionConfig {
        DetectionConfig {
            max_retries: self.detection.max_retries,
            retry_delay: Duration::from_millis(self.detection.retry_delay_ms),
            ready_timeout: Duration::from_millis(self.detection.ready_timeout_ms),
            ready_poll: Duration::from_millis(self.detection.ready_poll_ms),
        }
    }

    /// The `[controls]` section as keyboard skip steps.
    pub fn skip_steps(&self) -> SkipSteps {
        SkipSteps {
            coarse: self.controls.skip_step,
            fine: self.controls.fine_skip_step,
        }
    }
}
