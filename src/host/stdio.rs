// src/host/stdio.rs

//! Host implementation for the standalone binary.
//!
//! The binary runs once per save, so the editor side of the contract is
//! folded into the process boundary: the dirty flag arrives as a CLI
//! argument, and the reload request leaves as the single line `reload` on
//! stdout for the invoking plugin to act on. Status messages go to stderr;
//! diagnostics go through `tracing`.

use tracing::error;

use super::SaveHost;
use crate::engine::CommandFailure;

#[derive(Debug, Clone, Default)]
pub struct StdioHost {
    dirty: bool,
}

impl StdioHost {
    /// `dirty` mirrors the editor's "buffer has unsaved edits" state at the
    /// time the hook was invoked.
    pub fn new(dirty: bool) -> Self {
        Self { dirty }
    }
}

impl SaveHost for StdioHost {
    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn request_reload(&mut self) {
        // Machine-readable signal; everything else stays off stdout.
        println!("reload");
    }

    fn set_status(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn clear_status(&mut self) {
        // Nothing persists between invocations of the binary.
    }

    fn diagnostic(&mut self, failure: &CommandFailure) {
        error!(
            command = %failure.command,
            exit_code = failure.exit_code,
            output = %failure.output_lossy(),
            "command failed"
        );
    }
}
