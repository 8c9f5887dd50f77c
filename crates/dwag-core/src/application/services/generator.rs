//! Generator service - main application orchestrator.
//!
//! This service coordinates the materialization workflow:
//! 1. Derive the immutable project context from the answers
//! 2. Build the static manifests and validate disjointness
//! 3. Materialize each manifest against the filesystem port
//!
//! It implements the driving port (incoming) and uses driven ports
//! (outgoing).

use std::path::Path;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateSource},
    },
    domain::{
        Answers, CopyMode, MODULES, Manifest, ManifestEntry, ProjectContext,
        manifest, validate_disjoint,
        report::{GenerationPlan, GenerationReport, ManifestPlan},
    },
    error::DwagResult,
};

/// Main generation service.
///
/// Orchestrates context derivation, manifest materialization, and reporting.
pub struct GeneratorService {
    templates: Box<dyn TemplateSource>,
    filesystem: Box<dyn Filesystem>,
}

impl GeneratorService {
    /// Create a new generator service with the given adapters.
    pub fn new(templates: Box<dyn TemplateSource>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            templates,
            filesystem,
        }
    }

    /// Materialize the full project skeleton.
    ///
    /// This is the main use case: a single forward pass over the manifests.
    /// A failure aborts the current manifest immediately; files already
    /// written stay in place - generation is not transactional.
    #[instrument(
        skip_all,
        fields(project = %answers.name, output = %output_root.display())
    )]
    pub fn generate(&self, answers: Answers, output_root: &Path) -> DwagResult<GenerationReport> {
        let ctx = ProjectContext::derive(answers);
        info!(
            class_name = %ctx.class_name(),
            slug = %ctx.slug(),
            "Context derived"
        );

        let manifests = manifest::all(&ctx);
        validate_disjoint(&manifests)?;

        self.filesystem.create_dir_all(output_root)?;

        let mut files_written = 0;
        for m in &manifests {
            files_written += self.materialize(m, output_root, &ctx)?;
        }

        info!(files = files_written, "Generation completed");

        Ok(GenerationReport {
            run_id: Uuid::new_v4(),
            project_name: ctx.name().to_string(),
            class_name: ctx.class_name().to_string(),
            slug: ctx.slug().to_string(),
            modules: MODULES.iter().map(|m| ctx.module_dir(m)).collect(),
            files_written,
        })
    }

    /// Describe what [`generate`](Self::generate) would write, without
    /// touching the filesystem.
    pub fn plan(&self, answers: Answers) -> DwagResult<GenerationPlan> {
        let ctx = ProjectContext::derive(answers);
        let manifests = manifest::all(&ctx);
        validate_disjoint(&manifests)?;

        Ok(GenerationPlan {
            project_name: ctx.name().to_string(),
            manifests: manifests
                .into_iter()
                .map(|m| ManifestPlan {
                    name: m.name.to_string(),
                    outputs: m.entries.iter().map(|e| e.output_path.to_string()).collect(),
                })
                .collect(),
        })
    }

    /// Apply one manifest, entry by entry, fail-fast.
    #[instrument(skip_all, fields(manifest = %manifest.name))]
    pub fn materialize(
        &self,
        manifest: &Manifest,
        base: &Path,
        ctx: &ProjectContext,
    ) -> DwagResult<usize> {
        for entry in &manifest.entries {
            match entry.mode {
                CopyMode::Template => self.copy_template(entry, base, ctx)?,
                CopyMode::Binary => self.copy_binary(entry, base)?,
            }
        }
        debug!(entries = manifest.entries.len(), "Manifest materialized");
        Ok(manifest.entries.len())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Resolve, substitute, and write one text template.
    fn copy_template(&self, entry: &ManifestEntry, base: &Path, ctx: &ProjectContext) -> DwagResult<()> {
        let bytes = self.templates.read(&entry.template_path)?;
        let text =
            std::str::from_utf8(&bytes).map_err(|_| ApplicationError::Utf8Template {
                path: entry.template_path.to_string(),
            })?;

        let rendered = ctx.render(text);
        self.write(entry, base, rendered.as_bytes())
    }

    /// Resolve and write one binary template, byte-exact.
    fn copy_binary(&self, entry: &ManifestEntry, base: &Path) -> DwagResult<()> {
        let bytes = self.templates.read(&entry.template_path)?;
        self.write(entry, base, &bytes)
    }

    fn write(&self, entry: &ManifestEntry, base: &Path, content: &[u8]) -> DwagResult<()> {
        let dest = base.join(entry.output_path.as_path());

        if let Some(parent) = dest.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&dest, content)?;

        if entry.executable {
            self.filesystem.set_executable(&dest)?;
        }

        debug!(path = %dest.display(), "File written");
        Ok(())
    }
}
