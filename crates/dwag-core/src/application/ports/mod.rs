//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world.  Adapters in `dwag-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by
//!   infrastructure
//!   - `TemplateSource`: template storage/retrieval
//!   - `Filesystem`: file operations
//!   - `CommandRunner`: external tool invocation
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by
//!   application (defined in the CLI layer, implemented by services)

pub mod output;

pub use output::{CommandRunner, Filesystem, StepStatus, TemplateSource};
