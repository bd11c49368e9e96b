// src/engine/controller.rs

//! The save reaction controller.
//!
//! Everything here is scoped to a single save event: the rule set is
//! provided per call, the snapshots live on the stack, and the report is
//! returned to the caller. Two events for different files may run on
//! separate tasks without sharing any state; overlapping events for the
//! *same* file are not coordinated.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::config::ConfigFile;
use crate::engine::CommandFailure;
use crate::errors::Result;
use crate::exec::{CommandExecutor, ExecutionOutcome, substitute};
use crate::fs::{FileSnapshot, FileSystem};
use crate::host::SaveHost;

/// An external "file saved" notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveEvent {
    /// Absolute path of the file that was saved.
    pub path: PathBuf,
}

impl SaveEvent {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// What one save event amounted to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveReport {
    /// Rendered command texts, in execution order.
    pub commands_run: Vec<String>,
    /// Failures recorded, in execution order.
    pub failures: Vec<CommandFailure>,
    /// True if the host was asked to reload the file from disk.
    pub reload_requested: bool,
}

/// React to one completed save.
///
/// - `config` is the freshly loaded configuration; `None` (or a config with
///   no `commands` table) means the hook is disabled and nothing runs.
/// - Every matched command runs, in configuration order across rules and
///   within each rule's list; a failing command never stops later ones.
/// - After the last command, if the host has no unsaved edits, the file's
///   mtime is compared against the pre-execution snapshot and a reload is
///   requested when they differ.
/// - Command failures are reported via the host's status slot and
///   diagnostic stream, never as an `Err`; only unexpected collaborator
///   errors propagate.
pub async fn handle_save<E, H>(
    event: &SaveEvent,
    config: Option<&ConfigFile>,
    fs: &dyn FileSystem,
    executor: &mut E,
    host: &mut H,
) -> Result<SaveReport>
where
    E: CommandExecutor,
    H: SaveHost,
{
    let mut report = SaveReport::default();

    // State reset: a fresh event never shows a previous event's status.
    host.clear_status();

    let Some(rules) = config.and_then(ConfigFile::rules) else {
        debug!("no command configuration; nothing to do");
        return Ok(report);
    };

    let path_str = event.path.to_string_lossy().into_owned();
    let matched = rules.matches(&path_str);
    let total: usize = matched.iter().map(|rule| rule.commands.len()).sum();

    if total == 0 {
        debug!(path = %path_str, "no rule matches this file");
        return Ok(report);
    }

    info!(path = %path_str, rules = matched.len(), commands = total, "running save commands");

    // Snapshot before the first command; without it, verification is
    // skipped but the commands still run.
    let before = match FileSnapshot::capture(fs, &event.path) {
        Ok(snapshot) => Some(snapshot),
        Err(err) => {
            warn!(path = %path_str, error = %err, "cannot snapshot file before running commands");
            None
        }
    };

    for rule in &matched {
        for template in rule.commands {
            let rendered = substitute(template, &event.path);
            let outcome = executor.execute(template, &event.path).await;
            report.commands_run.push(rendered.clone());

            if let ExecutionOutcome::Failure { exit_code, output } = outcome {
                let failure = CommandFailure {
                    command: rendered,
                    exit_code,
                    output,
                };
                host.diagnostic(&failure);
                report.failures.push(failure);
                // Later commands still run; one failure never aborts the
                // sequence, within this rule or across rules.
            }
        }
    }

    if let Some(before) = before {
        verify_and_reload(event, fs, host, before, &mut report);
    }

    if let Some(last) = report.failures.last() {
        host.set_status(&status_message(report.failures.len(), last));
    }

    Ok(report)
}

/// Compare the file's mtime against the pre-execution snapshot and request
/// a reload if a command changed the file on disk.
///
/// Skipped entirely when the host reports unsaved edits: reloading would
/// discard them. A missing after-snapshot (file vanished mid-run) skips the
/// check without failing the event.
fn verify_and_reload<H: SaveHost>(
    event: &SaveEvent,
    fs: &dyn FileSystem,
    host: &mut H,
    before: FileSnapshot,
    report: &mut SaveReport,
) {
    if host.is_dirty() {
        debug!(path = %event.path.display(), "buffer has unsaved edits; skipping reload check");
        return;
    }

    match FileSnapshot::capture(fs, &event.path) {
        Ok(after) if after.differs_from(&before) => {
            info!(path = %event.path.display(), "file changed on disk; requesting reload");
            host.request_reload();
            report.reload_requested = true;
        }
        Ok(_) => {
            debug!(path = %event.path.display(), "file unchanged on disk");
        }
        Err(err) => {
            warn!(path = %event.path.display(), error = %err, "cannot snapshot file after running commands");
        }
    }
}

fn status_message(failure_count: usize, last: &CommandFailure) -> String {
    if failure_count == 1 {
        format!("ERROR: command failed: {}", last.output_lossy())
    } else {
        format!(
            "ERROR: {} commands failed; last: {}",
            failure_count,
            last.output_lossy()
        )
    }
}
