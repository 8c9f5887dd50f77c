use std::fmt;
use std::path::{Path, PathBuf};

/// A filesystem path guaranteed to be **relative**.
///
/// This type encodes an important invariant: template paths and manifest
/// output paths must never be absolute.
///
/// Why?
/// - Absolute paths break portability
/// - They can overwrite arbitrary locations
/// - They are almost always a bug in scaffolding systems
///
/// `RelativePath` is a *semantic guardrail*, not a filesystem abstraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if the provided path is absolute.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        assert!(
            !path.is_absolute(),
            "RelativePath cannot be absolute: {path:?}"
        );
        Self(path)
    }

    /// Try to create a relative path.
    ///
    /// This is the non-panicking variant.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, PathBuf> {
        let path = path.into();
        if path.is_absolute() {
            Err(path)
        } else {
            Ok(Self(path))
        }
    }

    /// Join a path segment onto this relative path.
    ///
    /// # Panics
    /// Panics if the joined segment is absolute.
    pub fn join(&self, segment: impl AsRef<Path>) -> Self {
        let segment = segment.as_ref();
        assert!(
            !segment.is_absolute(),
            "cannot join absolute path to RelativePath"
        );
        Self(self.0.join(segment))
    }

    /// Borrow as a `Path`.
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Consume into a `PathBuf`.
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        RelativePath::new(s)
    }
}

impl From<String> for RelativePath {
    fn from(s: String) -> Self {
        RelativePath::new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
