//! Integration test harness.

mod cli_test;
mod session_test;
mod timecode_test;
