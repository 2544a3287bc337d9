//! File persistence seam for inline script and metadata content

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{Context, Result};

/// Writes caller-supplied textual content to a destination path
///
/// Encoders never write the same path twice within one build, so
/// implementations must only be safe for concurrent writes to distinct
/// paths. Errors pass through to the caller unmodified.
pub trait FileStore: Send + Sync {
    fn write(&self, path: &Path, content: &str) -> Result<()>;
}

/// Filesystem-backed store, creating parent directories as needed
#[derive(Debug, Default, Clone)]
pub struct FsFileStore;

impl FileStore for FsFileStore {
    fn write(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        fs::write(path, content).with_context(|| format!("writing {}", path.display()))
    }
}

/// In-memory store for tests and dry runs
#[derive(Debug, Default)]
pub struct MemoryFileStore {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn len(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FileStore for MemoryFileStore {
    fn write(&self, path: &Path, content: &str) -> Result<()> {
        self.files.lock().unwrap().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
