//! Keyboard input mapping for playback control.
//!
//! Translates raw key events into [`ControlIntent`]s. The mapping is
//! pure: it never touches a player, so the host glue can decide when
//! and where to apply an intent. Arrow keys skip by the coarse step,
//! Shift+arrow by the fine step; everything is ignored while focus
//! sits inside a text-entry element, so typing a comment never moves
//! the video.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::player::controller::PlaybackController;
use crate::player::handle::PlayerHandle;

/// A requested playback movement, decoupled from its trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlIntent {
    /// Relative move by a signed, possibly fractional, second count.
    Skip(f64),
    /// Absolute move to a second count.
    SeekTo(f64),
    /// Advance a single frame (pauses).
    NextFrame,
    /// Retreat a single frame (pauses).
    PrevFrame,
    /// Play when paused, pause when playing.
    TogglePlayPause,
}

/// Where keyboard focus currently sits on the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// Anywhere that should receive playback shortcuts.
    Page,
    /// A text input, textarea, or content-editable element.
    TextInput,
}

/// Skip step sizes in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipSteps {
    /// Plain arrow key step.
    pub coarse: f64,
    /// Shift+arrow step.
    pub fine: f64,
}

impl Default for SkipSteps {
    fn default() -> Self {
        Self {
            coarse: 1.0,
            fine: 0.5,
        }
    }
}

/// Map a key event to a control intent, if any.
///
/// Returns `None` for keys the controller does not own and for every
/// key while focus is in a text-entry element.
pub fn map_key_event(key: KeyEvent, focus: FocusTarget, steps: SkipSteps) -> Option<ControlIntent> {
    if focus == FocusTarget::TextInput {
        return None;
    }

    let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
        steps.fine
    } else {
        steps.coarse
    };

    match key.code {
        KeyCode::Right => Some(ControlIntent::Skip(step)),
        KeyCode::Left => Some(ControlIntent::Skip(-step)),
        _ => None,
    }
}

/// Apply an intent to a controller.
pub fn apply_intent<P: PlayerHandle>(controller: &mut PlaybackController<P>, intent: ControlIntent) {
    match intent {
        ControlIntent::Skip(delta) => controller.skip(delta),
        ControlIntent::SeekTo(target) => controller.seek_to(target),
        ControlIntent::NextFrame => controller.next_frame(),
        ControlIntent::PrevFrame => controller.prev_frame(),
        ControlIntent::TogglePlayPause => controller.toggle_play_pause(),
    }
}
