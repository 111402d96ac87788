//! CLI subcommand handlers.
//!
//! Each handler returns `anyhow::Result` and does its own printing;
//! `main` only dispatches.

pub mod config;
pub mod review;
pub mod time;
