// src/exec/mod.rs

//! Command execution layer.
//!
//! This module is responsible for actually running the commands configured
//! for a saved file, using `tokio::process::Command`, and reporting each
//! command's result back to the controller as a value.
//!
//! - [`command`] holds the placeholder substitution and shell-word helpers,
//!   and the concrete `ProcessExecutor` used in production.
//! - [`CommandExecutor`] is the trait the controller talks to, so tests can
//!   replace process spawning with a fake implementation.

pub mod command;

pub use command::{FILE_PLACEHOLDER, ProcessExecutor, join_command, split_command, substitute};

use std::future::Future;
use std::path::Path;
use std::pin::Pin;

/// Outcome of one command invocation.
///
/// Failure is an expected, data-carrying result here, not an error: a
/// non-zero exit or a command that never launched both become `Failure`,
/// and the controller keeps going either way. Each command is attempted
/// exactly once; there is no retry state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    Success { output: Vec<u8> },
    Failure { exit_code: i32, output: Vec<u8> },
}

impl ExecutionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionOutcome::Success { .. })
    }

    /// The captured output, whichever variant this is.
    pub fn output(&self) -> &[u8] {
        match self {
            ExecutionOutcome::Success { output } => output,
            ExecutionOutcome::Failure { output, .. } => output,
        }
    }
}

/// Trait abstracting how a single command template is executed against a
/// saved file.
///
/// Production code uses [`ProcessExecutor`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait CommandExecutor: Send {
    /// Substitute the file placeholder into `template` and run the result,
    /// waiting for it to finish.
    fn execute<'a>(
        &'a mut self,
        template: &'a str,
        file_path: &'a Path,
    ) -> Pin<Box<dyn Future<Output = ExecutionOutcome> + Send + 'a>>;
}
