//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `dwag-adapters` crate provides implementations.

use std::borrow::Cow;
use std::path::Path;

use crate::domain::RelativePath;
use crate::error::DwagResult;

/// Port for template storage and retrieval.
///
/// Resolves a template-relative path to raw bytes.  Whether those bytes are
/// substituted text or a verbatim binary is the manifest entry's decision,
/// not the source's.
///
/// Implemented by:
/// - `dwag_adapters::EmbeddedTemplates` (payload compiled into the binary)
/// - `dwag_adapters::DirectoryTemplates` (user-supplied template root)
pub trait TemplateSource: Send + Sync {
    /// Read a template's bytes.
    ///
    /// # Errors
    /// `ApplicationError::TemplateNotFound` if the path does not resolve.
    fn read(&self, path: &RelativePath) -> DwagResult<Cow<'static, [u8]>>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `dwag_adapters::LocalFilesystem` (production)
/// - `dwag_adapters::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Content is bytes, not text - the payload includes binary files
/// - Directory creation is idempotent: an already-existing directory is
///   never an error
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> DwagResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &[u8]) -> DwagResult<()>;

    /// Mark a file executable (no-op where the platform has no such bit).
    fn set_executable(&self, path: &Path) -> DwagResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Terminal state of one external command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// The process exited with this code.
    Exited(i32),
    /// The process was terminated without an exit code (signal).
    Terminated,
}

impl StepStatus {
    pub fn success(&self) -> bool {
        matches!(self, Self::Exited(0))
    }

    pub fn code(&self) -> Option<i32> {
        match self {
            Self::Exited(code) => Some(*code),
            Self::Terminated => None,
        }
    }
}

/// Port for invoking external tools.
///
/// Implemented by:
/// - `dwag_adapters::ShellRunner` (std::process, blocking wait)
/// - `dwag_adapters::RecordingRunner` (testing; scripted statuses)
///
/// The run is synchronous: the call returns only once the process reached a
/// terminal state.  A non-zero exit is **not** an `Err` - the caller
/// inspects the returned status.  Only spawn failures (tool missing,
/// permission denied) are errors.
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> DwagResult<StepStatus>;
}
