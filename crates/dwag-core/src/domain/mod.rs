// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for dwag.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O (template resolution, file writes, process spawning) is handled
//! via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable values**: The derived context never mutates after creation

// Public API - what the world sees
pub mod common;
pub mod context;
pub mod error;
pub mod manifest;
pub mod naming;
pub mod report;

// Re-exports for convenience
pub use common::RelativePath;
pub use context::{Answers, ProjectContext};
pub use error::{DomainError, ErrorCategory};
pub use manifest::{CopyMode, MODULES, Manifest, ManifestEntry, validate_disjoint};
pub use report::GenerationReport;
