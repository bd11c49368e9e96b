// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! The binary is meant to be wired into an editor's post-save hook: the
//! editor invokes it once per completed save with the saved file's path,
//! passing `--dirty` when the buffer already has new unsaved edits.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `onsave`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "onsave",
    version,
    about = "Run configured commands against a file after it is saved.",
    long_about = None
)]
pub struct CliArgs {
    /// Path of the file that was just saved.
    ///
    /// Relative paths are anchored to the current working directory.
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Path to the config file (TOML).
    ///
    /// Default: `ONSAVE_CONFIG` if set, otherwise `OnSave.toml` in the
    /// current working directory.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// The in-memory buffer has unsaved edits; suppresses the reload check.
    #[arg(long)]
    pub dirty: bool,

    /// Print the matched commands after substitution without executing them.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `ONSAVE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
