//! Template source adapters.
//!
//! Two implementations of the `TemplateSource` port:
//!
//! - [`EmbeddedTemplates`] — the payload that ships compiled into the
//!   binary.  Zero setup, always available.
//! - [`DirectoryTemplates`] — a user-supplied template root on disk,
//!   for customizing the generated project without rebuilding dwag.
//!
//! # Resolution order
//!
//! [`resolve`] picks the source for a run:
//!
//! 1. An explicit directory (the `--templates-dir` flag).
//! 2. **`$DWAG_TEMPLATES_DIR`** — environment variable override.  Set this
//!    in `.env` or your shell profile to point at a custom payload.
//! 3. The embedded payload.

use std::env;
use std::path::PathBuf;

use tracing::{debug, info};

use dwag_core::{application::ports::TemplateSource, error::DwagResult};

mod directory;
mod embedded;

pub use directory::DirectoryTemplates;
pub use embedded::EmbeddedTemplates;

/// Environment variable naming a template directory override.
pub const TEMPLATES_DIR_ENV: &str = "DWAG_TEMPLATES_DIR";

/// Pick the template source for a run.
///
/// An explicit directory wins over the environment variable, which wins
/// over the embedded payload.  Directory candidates are validated before
/// use, so a bad `--templates-dir` fails here rather than midway through
/// materialization.
pub fn resolve(explicit: Option<PathBuf>) -> DwagResult<Box<dyn TemplateSource>> {
    if let Some(dir) = explicit {
        info!(path = %dir.display(), "using explicit template directory");
        return Ok(Box::new(DirectoryTemplates::open(dir)?));
    }

    if let Ok(dir) = env::var(TEMPLATES_DIR_ENV) {
        info!(path = %dir, "using template directory from {TEMPLATES_DIR_ENV}");
        return Ok(Box::new(DirectoryTemplates::open(PathBuf::from(dir))?));
    }

    debug!("using embedded template payload");
    Ok(Box::new(EmbeddedTemplates::new()))
}
