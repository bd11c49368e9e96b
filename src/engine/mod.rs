// src/engine/mod.rs

//! Save reaction engine.
//!
//! One save event flows through Idle → Matching → Executing → Verifying →
//! Done: load the rule set, match path prefixes against the saved file,
//! run each matched command in configuration order while isolating
//! per-command failures, then compare file mtimes to decide whether the
//! host should reload the file from disk.
//!
//! The controller lives in [`controller`]; this module holds the shared
//! report types.

pub mod controller;

pub use controller::{SaveEvent, SaveReport, handle_save};

/// One failed command, as reported to the status slot and the diagnostic
/// stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFailure {
    /// The rendered command text (after placeholder substitution).
    pub command: String,
    /// Exit code, or -1 when the command never launched.
    pub exit_code: i32,
    /// Captured output of the failed command.
    pub output: Vec<u8>,
}

impl CommandFailure {
    /// Captured output as lossy UTF-8, for display.
    pub fn output_lossy(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}
