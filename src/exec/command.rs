// src/exec/command.rs

//! Placeholder substitution, shell-word splitting, and the real process
//! executor.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::process::Stdio;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use tokio::process::Command;
use tracing::{debug, info, warn};

use super::{CommandExecutor, ExecutionOutcome};

/// Placeholder token replaced with the saved file's path.
///
/// Only whole-word occurrences count: `_file_` in `my_file_name` is part of
/// a larger word and stays untouched.
pub const FILE_PLACEHOLDER: &str = "_file_";

/// Exit code reported when a command never produced a real one (unparseable
/// quoting, empty argv, spawn failure).
const NO_EXIT_CODE: i32 = -1;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b_file_\b").expect("placeholder pattern is a valid regex"));

/// Replace every whole-word occurrence of [`FILE_PLACEHOLDER`] in `template`
/// with `file_path`.
///
/// The replacement is literal; `$` and friends in the path are not treated
/// as capture-group references.
pub fn substitute(template: &str, file_path: &Path) -> String {
    let path = file_path.to_string_lossy();
    PLACEHOLDER_RE
        .replace_all(template, NoExpand(path.as_ref()))
        .into_owned()
}

/// Split a rendered command string into an argument vector using POSIX
/// shell-word rules.
///
/// Quotes and escapes are honoured. Shell metacharacters (pipes,
/// redirection) are *not* interpreted: the argv is spawned directly, never
/// through a shell.
pub fn split_command(rendered: &str) -> Result<Vec<String>, shell_words::ParseError> {
    shell_words::split(rendered)
}

/// Join an argument vector back into a single command string, quoting words
/// as needed. Inverse of [`split_command`].
pub fn join_command<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    shell_words::join(args)
}

/// Real executor used in production.
///
/// Substitutes the placeholder, splits the result into an argv, and spawns
/// it directly via `tokio::process::Command`, waiting for the child to exit
/// and capturing its output. Execution is strictly sequential from the
/// caller's point of view; there is no timeout and no retry.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for ProcessExecutor {
    fn execute<'a>(
        &'a mut self,
        template: &'a str,
        file_path: &'a Path,
    ) -> Pin<Box<dyn Future<Output = ExecutionOutcome> + Send + 'a>> {
        Box::pin(run_command(template, file_path))
    }
}

async fn run_command(template: &str, file_path: &Path) -> ExecutionOutcome {
    let rendered = substitute(template, file_path);

    let argv = match split_command(&rendered) {
        Ok(argv) => argv,
        Err(err) => {
            warn!(command = %rendered, error = %err, "command has unparseable quoting");
            return ExecutionOutcome::Failure {
                exit_code: NO_EXIT_CODE,
                output: err.to_string().into_bytes(),
            };
        }
    };

    let Some((program, args)) = argv.split_first() else {
        warn!(template, "command is empty after substitution");
        return ExecutionOutcome::Failure {
            exit_code: NO_EXIT_CODE,
            output: b"empty command".to_vec(),
        };
    };

    info!(command = %rendered, "starting command");

    let result = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await;

    let output = match result {
        Ok(output) => output,
        Err(err) => {
            warn!(command = %rendered, error = %err, "failed to spawn command");
            return ExecutionOutcome::Failure {
                exit_code: NO_EXIT_CODE,
                output: err.to_string().into_bytes(),
            };
        }
    };

    let code = output.status.code().unwrap_or(NO_EXIT_CODE);

    // Keep both streams for failure reporting: stdout first, then stderr.
    let mut captured = output.stdout;
    captured.extend_from_slice(&output.stderr);

    if output.status.success() {
        debug!(command = %rendered, "command succeeded");
        ExecutionOutcome::Success { output: captured }
    } else {
        info!(command = %rendered, exit_code = code, "command exited non-zero");
        ExecutionOutcome::Failure {
            exit_code: code,
            output: captured,
        }
    }
}
