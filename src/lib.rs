//! AVC - video review controller.
//!
//! Core logic for augmenting a live broadcast player with extra
//! controls and a timestamped annotation workflow:
//!
//! - [`timecode`]: strict time-string parsing and display formatting
//! - [`player`]: playback control over a capability trait, plus
//!   discovery polling and keyboard intent mapping
//! - [`urltime`]: the `t` start-time URL parameter
//! - [`review`]: the game review data model, editor state,
//!   import/export, persistence, and offset repair
//! - [`config`]: TOML configuration for all of the above
//!
//! The `avc` binary exposes the review store and repair tooling on the
//! command line; everything player-facing is host-glue agnostic and
//! consumed as a library.

pub mod config;
pub mod player;
pub mod review;
pub mod timecode;
pub mod urltime;

pub use config::Config;
