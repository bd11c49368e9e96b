// src/host/mod.rs

//! Host editor abstraction.
//!
//! The save reaction is driven by an external host (originally an editor
//! plugin API). The controller only needs a narrow surface: whether the
//! in-memory buffer has unsaved edits, a way to request a reload from disk,
//! a single-slot status message, and an append-only diagnostic stream for
//! full failure detail.

pub mod stdio;

pub use stdio::StdioHost;

use crate::engine::CommandFailure;

pub trait SaveHost: Send {
    /// True if the in-memory view of the saved file has unsaved edits.
    fn is_dirty(&self) -> bool;

    /// Ask the host to discard the in-memory buffer and re-read the file
    /// from disk. One-way; the host owns what happens next.
    fn request_reload(&mut self);

    /// Replace the single-slot status message.
    fn set_status(&mut self, message: &str);

    /// Clear the status slot.
    fn clear_status(&mut self);

    /// Append one failure's full detail to the host's diagnostic stream.
    fn diagnostic(&mut self, failure: &CommandFailure);
}
