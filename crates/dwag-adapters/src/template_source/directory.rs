//! Directory-backed template source.
//!
//! Lets a user replace the embedded payload with their own template tree,
//! laid out exactly like the payload:
//!
//! ```text
//! templates/
//! ├── dwag-templates.toml      ← metadata (optional)
//! ├── build.gradle
//! ├── settings.gradle
//! ├── gradle/...
//! └── projects/
//!     ├── distribution/...
//!     ├── app/...
//!     └── server/...
//! ```
//!
//! # `dwag-templates.toml` format
//!
//! ```toml
//! [payload]
//! name        = "corporate-dropwizard"   # collection identifier
//! version     = "1.0.0"
//! description = "In-house project skeleton."   # optional
//! ```
//!
//! The metadata file is informational.  A malformed one is skipped with a
//! warning rather than failing the run; a missing template file, by
//! contrast, aborts materialization at read time.

use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use dwag_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::RelativePath,
    error::{DwagError, DwagResult},
};

/// Metadata file name recognized at the template root.
pub const METADATA_FILE: &str = "dwag-templates.toml";

#[derive(Debug, Deserialize)]
struct MetadataFile {
    payload: PayloadMetadata,
}

/// Descriptive metadata for a template collection.
#[derive(Debug, Clone, Deserialize)]
pub struct PayloadMetadata {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Template source reading from a directory on disk.
#[derive(Debug)]
pub struct DirectoryTemplates {
    root: PathBuf,
    metadata: Option<PayloadMetadata>,
}

impl DirectoryTemplates {
    /// Open a template root, validating that it exists and holds at least
    /// one file.
    #[instrument]
    pub fn open(root: PathBuf) -> DwagResult<Self> {
        if !root.is_dir() {
            return Err(DwagError::Configuration {
                message: format!("template directory not found: {}", root.display()),
            });
        }

        let source = Self {
            metadata: read_metadata(&root),
            root,
        };

        if source.paths().next().is_none() {
            return Err(DwagError::Configuration {
                message: format!("template directory is empty: {}", source.root.display()),
            });
        }

        Ok(source)
    }

    /// Metadata from `dwag-templates.toml`, if present and well-formed.
    pub fn metadata(&self) -> Option<&PayloadMetadata> {
        self.metadata.as_ref()
    }

    /// All template paths under the root, relative to it.  The metadata
    /// file is not part of the payload.
    pub fn paths(&self) -> impl Iterator<Item = RelativePath> + '_ {
        WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!(error = %err, "skipping unreadable template entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| entry.file_name() != METADATA_FILE)
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(&self.root)
                    .ok()
                    .map(|rel| RelativePath::new(rel))
            })
    }
}

impl TemplateSource for DirectoryTemplates {
    fn read(&self, path: &RelativePath) -> DwagResult<Cow<'static, [u8]>> {
        let full = self.root.join(path.as_path());
        debug!(path = %full.display(), "reading template file");

        match fs::read(&full) {
            Ok(bytes) => Ok(Cow::Owned(bytes)),
            Err(_) => Err(ApplicationError::TemplateNotFound {
                path: path.to_string(),
            }
            .into()),
        }
    }
}

fn read_metadata(root: &std::path::Path) -> Option<PayloadMetadata> {
    let path = root.join(METADATA_FILE);
    let raw = fs::read_to_string(&path).ok()?;

    match toml::from_str::<MetadataFile>(&raw) {
        Ok(file) => {
            debug!(name = %file.payload.name, version = %file.payload.version, "loaded template metadata");
            Some(file.payload)
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring malformed {METADATA_FILE}");
            None
        }
    }
}
