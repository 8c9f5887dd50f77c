//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A manifest entry referenced a template that the source cannot
    /// resolve.  Configuration/packaging defect, not user-recoverable.
    #[error("Template not found: {path}")]
    TemplateNotFound { path: String },

    /// A template entry's bytes are not valid UTF-8 (it should have been a
    /// binary entry).
    #[error("Template at {path} is not valid UTF-8 text")]
    Utf8Template { path: String },

    /// A destination file or directory could not be created or written.
    #[error("Write failed at {path}: {reason}")]
    WriteError { path: PathBuf, reason: String },

    /// A post-generation command exited non-zero or could not be spawned.
    #[error("External tool failed: {command} (exit code {code:?})")]
    ExternalToolFailure { command: String, code: Option<i32> },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { path } => vec![
                format!("No template at '{}'", path),
                "If you passed --templates-dir, check the directory layout".into(),
                "Otherwise this is a packaging defect - please report it".into(),
            ],
            Self::Utf8Template { path } => vec![
                format!("'{}' contains non-text bytes", path),
                "Substituted templates must be UTF-8; binary files are copied verbatim".into(),
            ],
            Self::WriteError { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::ExternalToolFailure { command, .. } => vec![
                format!("Command failed: {}", command),
                "Ensure the tool is installed and on your PATH".into(),
                "Re-run with --skip-install and finish the setup manually".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::Utf8Template { .. } => ErrorCategory::Internal,
            Self::WriteError { .. } => ErrorCategory::Internal,
            Self::ExternalToolFailure { .. } => ErrorCategory::Internal,
        }
    }
}
