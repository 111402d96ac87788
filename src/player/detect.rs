//! Player discovery and readiness polling.
//!
//! A host page exposes its player through some registry the core does
//! not control. Discovery is therefore a bounded retry loop over a
//! [`PlayerProbe`]: probe, sleep, probe again, up to a configured
//! attempt budget, then fail with a descriptive error. Readiness is a
//! second bounded poll that waits for the player to report a positive
//! finite duration, and silently gives up on timeout.

use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, warn};

use crate::player::handle::PlayerHandle;

/// One attempt at locating the active player instance.
///
/// Implementations wrap whatever registry or DOM probing the host
/// environment needs; the discovery loop only cares whether a single
/// attempt produced a player.
pub trait PlayerProbe {
    type Player: PlayerHandle;

    /// Try once to locate the player. `None` means "not there yet".
    fn probe(&mut self) -> Option<Self::Player>;
}

/// Tuning for discovery and readiness polling.
#[derive(Debug, Clone)]
pub struct DetectionConfig {
    /// Maximum probe attempts before giving up.
    pub max_retries: u32,
    /// Delay between probe attempts.
    pub retry_delay: Duration,
    /// Total time to wait for a usable duration.
    pub ready_timeout: Duration,
    /// Delay between duration checks.
    pub ready_poll: Duration,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            max_retries: 20,
            retry_delay: Duration::from_millis(500),
            ready_timeout: Duration::from_secs(5),
            ready_poll: Duration::from_millis(100),
        }
    }
}

/// Discovery failure: the retry budget ran out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectError {
    #[error("player not found after {attempts} attempts ({waited_secs} seconds)")]
    NotFound { attempts: u32, waited_secs: u64 },
}

/// Locate the player, retrying up to the configured attempt budget.
///
/// Sleeps `retry_delay` between attempts (not after the last one).
/// The returned error carries the attempt count and total wait so the
/// caller can log something useful before declining to activate.
pub fn detect_player<P: PlayerProbe>(
    probe: &mut P,
    config: &DetectionConfig,
) -> Result<P::Player, DetectError> {
    for attempt in 1..=config.max_retries {
        if let Some(player) = probe.probe() {
            debug!(attempt, "player located");
            return Ok(player);
        }
        if attempt < config.max_retries {
            std::thread::sleep(config.retry_delay);
        }
    }

    let waited = config.retry_delay.as_millis() as u64 * config.max_retries as u64 / 1000;
    let err = DetectError::NotFound {
        attempts: config.max_retries,
        waited_secs: waited,
    };
    warn!(%err, "player discovery gave up");
    Err(err)
}

/// Wait until the player reports a positive, finite duration.
///
/// Polls every `ready_poll` up to `ready_timeout`. Returns whether the
/// player became ready; a timeout is not an error, the caller just
/// proceeds with an unloaded player (whose control operations are
/// no-ops until the duration appears).
pub fn wait_for_ready<H: PlayerHandle>(player: &H, config: &DetectionConfig) -> bool {
    let start = Instant::now();
    loop {
        let duration = player.duration();
        if duration.is_finite() && duration > 0.0 {
            debug!(duration, "player ready");
            return true;
        }
        if start.elapsed() >= config.ready_timeout {
            warn!("player never reported a duration; continuing anyway");
            return false;
        }
        std::thread::sleep(config.ready_poll);
    }
}
