//! Outcome values returned by the generator.

use serde::Serialize;
use uuid::Uuid;

/// Summary of one completed generator run.
///
/// Serializable so the CLI can emit it as JSON in machine-readable output
/// modes.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    /// Unique id for this run (provenance in logs).
    pub run_id: Uuid,
    pub project_name: String,
    pub class_name: String,
    pub slug: String,
    /// Module directory names created under the output root.
    pub modules: Vec<String>,
    pub files_written: usize,
}

/// What a dry run *would* materialize, grouped per manifest.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationPlan {
    pub project_name: String,
    pub manifests: Vec<ManifestPlan>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ManifestPlan {
    pub name: String,
    pub outputs: Vec<String>,
}

impl GenerationPlan {
    /// Total number of files the plan covers.
    pub fn file_count(&self) -> usize {
        self.manifests.iter().map(|m| m.outputs.len()).sum()
    }
}
