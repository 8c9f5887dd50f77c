// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A template or output path escaped the relative-path guardrail.
    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    /// Two manifest entries target the same output file.
    ///
    /// Manifests are disjoint by construction; hitting this means a static
    /// file list was edited incorrectly, not that the user did anything
    /// wrong.
    #[error("Duplicate output path across manifests: {path}")]
    DuplicateOutputPath { path: String },

    /// A manifest with no entries.
    #[error("Manifest '{name}' has no entries")]
    EmptyManifest { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("Path '{}' is absolute", path),
                "Template and output paths must be relative to their roots".into(),
            ],
            Self::DuplicateOutputPath { path } => vec![
                format!("Two manifest entries write to '{}'", path),
                "This is a packaging defect in dwag itself - please report it".into(),
            ],
            Self::EmptyManifest { name } => vec![
                format!("Manifest '{}' is empty", name),
                "This is a packaging defect in dwag itself - please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Validation,
            Self::DuplicateOutputPath { .. } | Self::EmptyManifest { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
