//! Infrastructure adapters for dwag.
//!
//! This crate implements the ports defined in `dwag-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod runner;
pub mod template_source;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use runner::{RecordingRunner, ShellRunner};
pub use template_source::{DirectoryTemplates, EmbeddedTemplates};
