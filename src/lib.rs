// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod host;
pub mod logging;
pub mod rules;

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{ConfigFile, load_if_present, resolve_config_path};
use crate::engine::{SaveEvent, SaveReport, handle_save};
use crate::exec::{ProcessExecutor, substitute};
use crate::fs::RealFileSystem;
use crate::host::StdioHost;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (fresh per invocation, so rule edits apply immediately)
/// - the rule matcher and command executor
/// - the stdio host used by editor integrations
pub async fn run(args: CliArgs) -> Result<SaveReport> {
    let config_path = resolve_config_path(args.config.as_deref());
    let config = load_if_present(&config_path)?;

    let path = absolute_file_path(&args.file)?;
    let event = SaveEvent::new(path);

    if args.dry_run {
        print_dry_run(&event, config.as_ref());
        return Ok(SaveReport::default());
    }

    let fs = RealFileSystem;
    let mut executor = ProcessExecutor::new();
    let mut host = StdioHost::new(args.dirty);

    let report = handle_save(&event, config.as_ref(), &fs, &mut executor, &mut host).await?;
    Ok(report)
}

/// Prefixes are compared against the full path string, so a relative
/// argument is anchored to the current directory first. Symlinks are not
/// resolved — canonicalizing would change what the raw-string prefixes see.
fn absolute_file_path(file: &str) -> Result<PathBuf> {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return Ok(path);
    }
    Ok(env::current_dir()?.join(path))
}

/// Print the commands a save of this file would run, without executing.
fn print_dry_run(event: &SaveEvent, config: Option<&ConfigFile>) {
    println!("onsave dry-run for {}", event.path.display());

    let Some(rules) = config.and_then(ConfigFile::rules) else {
        println!("  (no command configuration)");
        return;
    };

    let matched = rules.matches(&event.path.to_string_lossy());
    if matched.is_empty() {
        println!("  (no matching prefixes)");
        return;
    }

    for rule in matched {
        println!("  [{}]", rule.prefix);
        for template in rule.commands {
            println!("    {}", substitute(template, &event.path));
        }
    }

    debug!("dry-run complete (no execution)");
}
