//! Capability interface for an external video player.
//!
//! The controller and discovery code never touch a concrete player
//! type; everything goes through this trait so a real player binding
//! and a test double are interchangeable.

/// Minimal surface a playback target must expose.
///
/// Times are in seconds. `duration` may be NaN or zero while the
/// player is still loading; callers are expected to treat that as
/// "not ready" rather than an error.
pub trait PlayerHandle {
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Move the playback position to `seconds`.
    fn set_current_time(&mut self, seconds: f64);

    /// Total media duration in seconds. NaN or <= 0 while loading.
    fn duration(&self) -> f64;

    /// Start playback.
    fn play(&mut self);

    /// Stop playback.
    fn pause(&mut self);

    /// Whether playback is currently paused.
    fn paused(&self) -> bool;
}
