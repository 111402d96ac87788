//! Playback control over a [`PlayerHandle`].
//!
//! Translates control intents (skip, seek, frame step, play/pause
//! toggle) into calls against the player, clamping every resulting
//! position to the playable range `[0, duration]`. Nothing here
//! returns errors: range violations clamp silently, and operations
//! that need a known duration are no-ops while the player is still
//! loading.

use crate::player::handle::PlayerHandle;

/// Default assumed frame rate when none is configured.
pub const DEFAULT_FPS: f64 = 30.0;

/// Stateful wrapper that drives a player with range-checked movements.
#[derive(Debug)]
pub struct PlaybackController<P: PlayerHandle> {
    player: P,
    /// Seconds per frame, derived from the assumed frame rate.
    frame_time: f64,
}

impl<P: PlayerHandle> PlaybackController<P> {
    /// Create a controller with the default frame rate (30 fps).
    pub fn new(player: P) -> Self {
        Self::with_fps(player, DEFAULT_FPS)
    }

    /// Create a controller assuming the given frames-per-second.
    pub fn with_fps(player: P, fps: f64) -> Self {
        Self {
            player,
            frame_time: 1.0 / fps,
        }
    }

    /// Move the position by `delta` seconds (negative to rewind),
    /// clamped to `[0, duration]`.
    ///
    /// A no-op while the duration is NaN or <= 0: writing a position
    /// before the player has loaded would corrupt its state.
    pub fn skip(&mut self, delta: f64) {
        let duration = self.player.duration();
        if !duration_known(duration) {
            return;
        }
        let target = (self.player.current_time() + delta).clamp(0.0, duration);
        self.player.set_current_time(target);
    }

    /// Jump to an absolute position, clamped to `[0, duration]`.
    ///
    /// Same not-ready guard as [`skip`](Self::skip).
    pub fn seek_to(&mut self, target: f64) {
        let duration = self.player.duration();
        if !duration_known(duration) {
            return;
        }
        self.player.set_current_time(target.clamp(0.0, duration));
    }

    /// Step forward one frame. Pauses first: frame stepping is only
    /// meaningful while stopped. Never advances to or past the end.
    pub fn next_frame(&mut self) {
        self.player.pause();
        let target = self.player.current_time() + self.frame_time;
        // False for a NaN duration too, which keeps this a no-op
        // while the player is loading.
        if target < self.player.duration() {
            self.player.set_current_time(target);
        }
    }

    /// Step backward one frame, pausing first. Floors at 0.
    pub fn prev_frame(&mut self) {
        self.player.pause();
        let target = (self.player.current_time() - self.frame_time).max(0.0);
        self.player.set_current_time(target);
    }

    /// Play when paused, pause when playing.
    pub fn toggle_play_pause(&mut self) {
        if self.player.paused() {
            self.player.play();
        } else {
            self.player.pause();
        }
    }

    pub fn play(&mut self) {
        self.player.play();
    }

    pub fn pause(&mut self) {
        self.player.pause();
    }

    pub fn is_paused(&self) -> bool {
        self.player.paused()
    }

    /// Current position as reported by the player, unclamped.
    pub fn current_time(&self) -> f64 {
        self.player.current_time()
    }

    /// Duration as reported by the player, unclamped.
    pub fn duration(&self) -> f64 {
        self.player.duration()
    }

    /// Seconds covered by a single frame step.
    pub fn frame_time(&self) -> f64 {
        self.frame_time
    }

    /// Borrow the underlying player.
    pub fn player(&self) -> &P {
        &self.player
    }
}

/// Whether the player has reported a usable duration yet.
fn duration_known(duration: f64) -> bool {
    duration.is_finite() && duration > 0.0
}
