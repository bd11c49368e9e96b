// src/config/model.rs

use serde::Deserialize;

use crate::rules::RuleSet;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [commands]
/// "/home/user/notes" = ["notefmt _file_"]
/// "/home/user/project" = ["cargo fmt -- _file_", "linter --fix _file_"]
/// ```
///
/// Keys of `[commands]` are path prefixes; values are the commands to run,
/// in order, whenever a file under that prefix is saved. The table keeps
/// document order. Leaving the `commands` key out entirely is the valid
/// "disabled" state, not an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    /// Path-prefix rules from `[commands]`, in document order.
    #[serde(default)]
    pub commands: Option<RuleSet>,
}

/// Validated configuration. Construct via `TryFrom<RawConfigFile>`.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    commands: Option<RuleSet>,
}

impl ConfigFile {
    /// Constructor used after validation.
    pub(crate) fn new_unchecked(commands: Option<RuleSet>) -> Self {
        Self { commands }
    }

    /// The configured rules, or `None` when the save hook is disabled.
    pub fn rules(&self) -> Option<&RuleSet> {
        self.commands.as_ref()
    }
}
