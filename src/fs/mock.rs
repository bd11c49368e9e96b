// src/fs/mock.rs

use super::FileSystem;
use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

/// In-memory filesystem for tests.
///
/// Tracks per-path contents and modification times. Mutations advance a
/// logical clock, so `touch` changes a file's mtime the way an external
/// command rewriting the file would — deterministically, without sleeping.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    files: HashMap<PathBuf, MockFile>,
    clock: u64,
}

#[derive(Debug, Clone)]
struct MockFile {
    contents: String,
    mtime: SystemTime,
}

impl Inner {
    fn tick(&mut self) -> SystemTime {
        self.clock += 1;
        SystemTime::UNIX_EPOCH + Duration::from_secs(self.clock)
    }
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or overwrite a file, advancing its mtime.
    pub fn add_file(&self, path: impl AsRef<Path>, contents: impl Into<String>) {
        let mut inner = self.inner.lock().unwrap();
        let mtime = inner.tick();
        inner.files.insert(
            path.as_ref().to_path_buf(),
            MockFile {
                contents: contents.into(),
                mtime,
            },
        );
    }

    /// Bump an existing file's mtime without changing its contents.
    pub fn touch(&self, path: impl AsRef<Path>) {
        let mut inner = self.inner.lock().unwrap();
        let mtime = inner.tick();
        if let Some(file) = inner.files.get_mut(path.as_ref()) {
            file.mtime = mtime;
        }
    }

    /// Remove a file, as if a command deleted it mid-run.
    pub fn remove_file(&self, path: impl AsRef<Path>) {
        let mut inner = self.inner.lock().unwrap();
        inner.files.remove(path.as_ref());
    }
}

impl FileSystem for MockFileSystem {
    fn modified(&self, path: &Path) -> Result<SystemTime> {
        let inner = self.inner.lock().unwrap();
        inner
            .files
            .get(path)
            .map(|file| file.mtime)
            .ok_or_else(|| anyhow!("File not found: {:?}", path))
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.files.contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let inner = self.inner.lock().unwrap();
        inner
            .files
            .get(path)
            .map(|file| file.contents.clone())
            .ok_or_else(|| anyhow!("File not found: {:?}", path))
    }
}
