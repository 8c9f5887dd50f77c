//! Dwag Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for `dwag`, a
//! generator that scaffolds Dropwizard + Angular + Gradle multi-module
//! projects, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            dwag-cli (CLI)               │
//! │    (prompting, flags, user output)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (GeneratorService, InstallRunner)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │  (TemplateSource, Filesystem, Runner)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     dwag-adapters (Infrastructure)      │
//! │ (EmbeddedTemplates, LocalFilesystem,    │
//! │  ShellRunner, Memory* test doubles)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (naming, ProjectContext, Manifest)     │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dwag_core::{application::GeneratorService, domain::Answers};
//! # fn adapters() -> (Box<dyn dwag_core::application::ports::TemplateSource>,
//! #                   Box<dyn dwag_core::application::ports::Filesystem>) { unimplemented!() }
//!
//! let answers = Answers {
//!     name: "my cool app".into(),
//!     description: "Demo".into(),
//!     package: "com.example.demo".into(),
//! };
//!
//! let (templates, filesystem) = adapters();
//! let service = GeneratorService::new(templates, filesystem);
//! let report = service.generate(answers, "./out".as_ref()).unwrap();
//! println!("wrote {} files", report.files_written);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GeneratorService, InstallPlan, InstallReport, InstallRunner,
        ports::{CommandRunner, Filesystem, StepStatus, TemplateSource},
    };
    pub use crate::domain::{
        Answers, CopyMode, GenerationReport, Manifest, ManifestEntry, ProjectContext, RelativePath,
    };
    pub use crate::error::{DwagError, DwagResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
