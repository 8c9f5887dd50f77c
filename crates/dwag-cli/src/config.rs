//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `--config FILE` (must exist if given)
//! 3. `.dwag.toml` in the current directory
//! 4. The per-user config file (`~/.config/dwag/config.toml` on Linux)
//! 5. Built-in defaults (always present)
//!
//! A missing file is fine; a file that exists but fails to parse is an
//! error — silently falling back to defaults would hide typos.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use dwag_core::domain::Answers;

/// Name of the local (per-project) config file.
pub const LOCAL_CONFIG: &str = ".dwag.toml";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default answers for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
    /// Install chain settings.
    pub install: InstallConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Java package offered when the user does not supply one.
    pub package: String,
    /// Description offered when the user does not supply one.
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Template directory used when `--templates-dir` is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Skip the install chain entirely.
    pub skip: bool,
    /// Abort the chain at the first failing step.
    pub halt_on_failure: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            output: OutputConfig::default(),
            templates: TemplateConfig::default(),
            install: InstallConfig::default(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            package: Answers::DEFAULT_PACKAGE.into(),
            description: String::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self { local_path: None }
    }
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            skip: false,
            halt_on_failure: false,
        }
    }
}

impl AppConfig {
    /// Load configuration following the resolution order in the module docs.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        if let Some(path) = config_file {
            return Self::from_file(path)
                .with_context(|| format!("loading config from '{}'", path.display()));
        }

        let local = Path::new(LOCAL_CONFIG);
        if local.is_file() {
            return Self::from_file(local)
                .with_context(|| format!("loading config from '{LOCAL_CONFIG}'"));
        }

        let default_path = Self::config_path();
        if default_path.is_file() {
            return Self::from_file(&default_path)
                .with_context(|| format!("loading config from '{}'", default_path.display()));
        }

        Ok(Self::default())
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.dwag.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("rs", "dwag", "dwag")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_package_matches_prompt_default() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.package, "com.foobar.application");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn default_install_chain_continues_on_failure() {
        let cfg = AppConfig::default();
        assert!(!cfg.install.skip);
        assert!(!cfg.install.halt_on_failure);
    }

    #[test]
    fn explicit_file_is_parsed() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            "[defaults]\npackage = \"com.acme\"\n\n[install]\nhalt_on_failure = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.package, "com.acme");
        assert!(cfg.install.halt_on_failure);
        // Untouched sections keep their defaults.
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = PathBuf::from("/no/such/config.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "defaults = 3").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
