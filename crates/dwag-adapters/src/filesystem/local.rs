//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use dwag_core::{application::ports::Filesystem, error::DwagResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> DwagResult<()> {
        // std::fs::create_dir_all is already idempotent.
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> DwagResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn set_executable(&self, path: &Path) -> DwagResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata =
                std::fs::metadata(path).map_err(|e| map_io_error(path, e, "get metadata"))?;
            let mut perms = metadata.permissions();
            let mode = perms.mode();
            perms.set_mode(mode | 0o111);
            std::fs::set_permissions(path, perms)
                .map_err(|e| map_io_error(path, e, "set permissions"))?;
        }
        #[cfg(not(unix))]
        {
            // No executable bit to set.
            let _ = path;
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> dwag_core::error::DwagError {
    use dwag_core::application::ApplicationError;

    ApplicationError::WriteError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_reads_back_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("a/b/file.bin");

        fs.create_dir_all(path.parent().unwrap()).unwrap();
        fs.write_file(&path, &[0u8, 159, 146, 150]).unwrap();

        assert!(fs.exists(&path));
        assert_eq!(std::fs::read(&path).unwrap(), vec![0u8, 159, 146, 150]);
    }

    #[test]
    fn create_dir_all_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("nested/dir");

        fs.create_dir_all(&path).unwrap();
        fs.create_dir_all(&path).unwrap();
        assert!(path.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn set_executable_adds_exec_bits() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("gradlew");

        fs.write_file(&path, b"#!/bin/sh\n").unwrap();
        fs.set_executable(&path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[test]
    fn write_into_missing_parent_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("no/such/parent/file.txt");

        let err = fs.write_file(&path, b"x").unwrap_err();
        assert!(err.to_string().contains("Write failed"));
    }
}
