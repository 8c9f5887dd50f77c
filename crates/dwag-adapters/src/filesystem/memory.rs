//! In-memory filesystem for tests.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use dwag_core::{application::ports::Filesystem, error::DwagResult};

/// Thread-safe in-memory filesystem.
///
/// Stores written files as byte vectors so tests can read them back and
/// assert byte-exactness.  Clones share the same backing store.
#[derive(Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    files: HashMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
    executables: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a written file back.
    pub fn read_file(&self, path: &Path) -> Option<Vec<u8>> {
        self.inner.read().unwrap().files.get(path).cloned()
    }

    /// Number of files written so far.
    pub fn file_count(&self) -> usize {
        self.inner.read().unwrap().files.len()
    }

    /// All written file paths, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.inner.read().unwrap().files.keys().cloned().collect();
        paths.sort();
        paths
    }

    /// Whether `set_executable` was called for this path.
    pub fn is_executable(&self, path: &Path) -> bool {
        self.inner.read().unwrap().executables.contains(path)
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> DwagResult<()> {
        // Idempotent by construction: HashSet insertion.
        self.inner
            .write()
            .unwrap()
            .directories
            .insert(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> DwagResult<()> {
        self.inner
            .write()
            .unwrap()
            .files
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn set_executable(&self, path: &Path) -> DwagResult<()> {
        self.inner
            .write()
            .unwrap()
            .executables
            .insert(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}
