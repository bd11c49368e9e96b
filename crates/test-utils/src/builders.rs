#![allow(dead_code)]

use onsave::config::{ConfigFile, RawConfigFile};
use onsave::rules::RuleSet;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    rules: RuleSet,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            rules: RuleSet::new(),
        }
    }

    /// A config with no `commands` table at all (the disabled state).
    pub fn disabled() -> ConfigFile {
        ConfigFile::try_from(RawConfigFile { commands: None })
            .expect("disabled config is always valid")
    }

    pub fn with_rule(mut self, prefix: &str, commands: &[&str]) -> Self {
        self.rules
            .insert(prefix, commands.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(RawConfigFile {
            commands: Some(self.rules),
        })
        .expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
