//! Application services: use case orchestration.

pub mod generator;
pub mod install;

pub use generator::GeneratorService;
pub use install::{InstallPlan, InstallReport, InstallRunner, InstallStep, StepOutcome, StepResult};
