//! Input handling for playback control.
//!
//! - `keyboard`: key event → [`keyboard::ControlIntent`] mapping

pub mod keyboard;

pub use keyboard::{apply_intent, map_key_event, ControlIntent, FocusTarget, SkipSteps};
