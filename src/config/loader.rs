// src/config/loader.rs

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let contents = fs::read_to_string(path.as_ref())?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Checks that every command template is non-blank.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw)?;
    Ok(config)
}

/// Like [`load_and_validate`], but a missing file is the valid "disabled"
/// state rather than an error.
///
/// The rule set is reloaded through here on every save event, so edits to
/// the config file take effect on the next save without any restart.
pub fn load_if_present(path: impl AsRef<Path>) -> Result<Option<ConfigFile>> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "no config file; save hook disabled");
        return Ok(None);
    }
    load_and_validate(path).map(Some)
}

/// Helper to resolve a default config path.
///
/// Currently this just returns `OnSave.toml` in the current working
/// directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("OnSave.toml")
}

/// Resolve the config path from, in priority order: an explicit CLI value,
/// the `ONSAVE_CONFIG` environment variable, [`default_config_path`].
pub fn resolve_config_path(cli_value: Option<&str>) -> PathBuf {
    if let Some(value) = cli_value {
        return PathBuf::from(value);
    }
    if let Ok(value) = env::var("ONSAVE_CONFIG")
        && !value.is_empty()
    {
        return PathBuf::from(value);
    }
    default_config_path()
}
