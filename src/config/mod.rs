// src/config/mod.rs

//! Configuration loading and validation for onsave.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate command templates (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_if_present, resolve_config_path};
pub use model::{ConfigFile, RawConfigFile};
pub use validate::validate_config;
