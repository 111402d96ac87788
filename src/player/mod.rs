//! Playback control over an external video player.
//!
//! The player itself belongs to the host page; this module owns the
//! policy around it:
//!
//! - `handle`: the [`PlayerHandle`] capability trait, the only coupling
//!   to any concrete player
//! - `controller`: skip / seek / frame-step / play-pause with range
//!   clamping ([`PlaybackController`])
//! - `detect`: bounded-retry discovery and readiness polling
//! - `input`: keyboard event → control intent mapping
//!
//! # Usage
//!
//! ```no_run
//! use avc::player::{detect_player, wait_for_ready, DetectionConfig, PlaybackController};
//! # use avc::player::PlayerProbe;
//! # fn demo<P: PlayerProbe>(mut probe: P) -> anyhow::Result<()> {
//! let config = DetectionConfig::default();
//! let player = detect_player(&mut probe, &config)?;
//! wait_for_ready(&player, &config);
//!
//! let mut controller = PlaybackController::new(player);
//! controller.skip(-1.0);
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod detect;
pub mod handle;
pub mod input;

pub use controller::{PlaybackController, DEFAULT_FPS};
pub use detect::{detect_player, wait_for_ready, DetectError, DetectionConfig, PlayerProbe};
pub use handle::PlayerHandle;
pub use input::{apply_intent, map_key_event, ControlIntent, FocusTarget, SkipSteps};
