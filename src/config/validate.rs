// src/config/validate.rs

use tracing::warn;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{OnSaveError, Result};
use crate::rules::RuleSet;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = OnSaveError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.commands))
    }
}

/// Validate a parsed configuration.
///
/// Blank command templates are configuration mistakes and rejected. An empty
/// prefix is legal (it matches every saved file) but worth flagging, as is a
/// prefix with no commands at all.
pub fn validate_config(cfg: &RawConfigFile) -> Result<()> {
    if let Some(rules) = &cfg.commands {
        validate_rules(rules)?;
    }
    Ok(())
}

fn validate_rules(rules: &RuleSet) -> Result<()> {
    for (prefix, commands) in rules.iter() {
        if prefix.is_empty() {
            warn!("empty prefix in [commands] matches every saved file");
        }
        if commands.is_empty() {
            warn!(prefix, "prefix has an empty command list");
        }
        for command in commands {
            if command.trim().is_empty() {
                return Err(OnSaveError::ConfigError(format!(
                    "blank command template under prefix '{prefix}'"
                )));
            }
        }
    }
    Ok(())
}
