// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::path::Path;
use std::time::SystemTime;

use anyhow::{Context, Result};

pub mod mock;

/// Abstract filesystem interface.
///
/// The controller only needs file metadata for its before/after snapshots;
/// tests swap in [`mock::MockFileSystem`] to control mtimes directly.
pub trait FileSystem: Send + Sync + Debug {
    fn modified(&self, path: &Path) -> Result<SystemTime>;
    fn exists(&self, path: &Path) -> bool;
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// Modification metadata captured around command execution.
///
/// Taken immediately before the first command runs and again after the last
/// one; used purely for change detection, never content comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSnapshot {
    mtime: SystemTime,
}

impl FileSnapshot {
    /// Capture the file's current modification time.
    pub fn capture(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        Ok(Self {
            mtime: fs.modified(path)?,
        })
    }

    /// True if the other snapshot carries a different modification time.
    pub fn differs_from(&self, other: &FileSnapshot) -> bool {
        self.mtime != other.mtime
    }
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn modified(&self, path: &Path) -> Result<SystemTime> {
        let metadata =
            fs::metadata(path).with_context(|| format!("reading metadata for {:?}", path))?;
        metadata
            .modified()
            .with_context(|| format!("reading mtime for {:?}", path))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("reading file {:?}", path))
    }
}
