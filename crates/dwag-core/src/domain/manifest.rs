//! Materialization manifests.
//!
//! A manifest is a static list of (template path → output path) pairs
//! describing one batch of file materialization.  The lists themselves are
//! fixed at design time; only the output paths vary, via the two placement
//! policies:
//!
//! - **flat**: `{slug}-{module}/{relative}` (the root manifest has no module
//!   prefix at all);
//! - **filename-prefixed**: Java sources placed under
//!   `{slug}-server/src/main/java/{package as path}/`, with selected files
//!   additionally prefixed by the derived class name
//!   (`Application.java` → `MyAppApplication.java`).
//!
//! Manifests are disjoint by construction — no two entries across the whole
//! run target the same output path.  [`validate_disjoint`] enforces this
//! before any file is written.

use std::collections::HashSet;

use super::common::RelativePath;
use super::context::ProjectContext;
use super::error::DomainError;

/// Generated module names, in generation order.
pub const MODULES: [&str; 3] = ["distribution", "app", "server"];

/// How a manifest entry's content is treated during materialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMode {
    /// Content undergoes `{{placeholder}}` substitution.
    Template,
    /// Content is copied byte-for-byte.
    Binary,
}

/// One (template, destination, mode) triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Path of the source template, relative to the template root.
    pub template_path: RelativePath,
    /// Destination path, relative to the generation base directory.
    pub output_path: RelativePath,
    pub mode: CopyMode,
    /// Whether the written file needs the executable bit (`gradlew`).
    pub executable: bool,
}

impl ManifestEntry {
    /// A substituted text entry.
    pub fn template(template_path: impl Into<RelativePath>, output_path: impl Into<RelativePath>) -> Self {
        Self {
            template_path: template_path.into(),
            output_path: output_path.into(),
            mode: CopyMode::Template,
            executable: false,
        }
    }

    /// A byte-exact entry.
    pub fn binary(template_path: impl Into<RelativePath>, output_path: impl Into<RelativePath>) -> Self {
        Self {
            template_path: template_path.into(),
            output_path: output_path.into(),
            mode: CopyMode::Binary,
            executable: false,
        }
    }

    /// Mark the written file executable.
    pub fn with_executable(mut self) -> Self {
        self.executable = true;
        self
    }
}

/// A named batch of materialization entries, processed in order and
/// fail-fast as a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub name: &'static str,
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new(name: &'static str, entries: Vec<ManifestEntry>) -> Self {
        Self { name, entries }
    }

    /// A manifest with nothing to materialize is a construction bug.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyManifest {
                name: self.name.to_string(),
            });
        }
        Ok(())
    }
}

// ── Static manifest definitions ───────────────────────────────────────────────

/// All manifests for one generator run, in materialization order.
///
/// Later manifests may rely on directories created by earlier ones;
/// directory creation is idempotent so the ordering constraint is soft.
pub fn all(ctx: &ProjectContext) -> Vec<Manifest> {
    vec![
        root_build(),
        module_flat(ctx, "distribution", DISTRIBUTION_FILES, DISTRIBUTION_BINARY_FILES),
        module_flat(ctx, "app", APP_FILES, &[]),
        module_flat(ctx, "server", SERVER_FILES, &[]),
        server_java(ctx),
        project_files(),
    ]
}

/// Gradle build skeleton at the output root.
fn root_build() -> Manifest {
    let mut entries: Vec<ManifestEntry> = [
        "build.gradle",
        "gradle.properties",
        "gradlew.bat",
        "settings.gradle",
        "gradle/idea.gradle",
        "gradle/node.gradle",
        "gradle/repositories.gradle",
        "gradle/wrapper/gradle-wrapper.properties",
    ]
    .into_iter()
    .map(|f| ManifestEntry::template(f, f))
    .collect();

    entries.push(ManifestEntry::template("gradlew", "gradlew").with_executable());
    entries.push(ManifestEntry::binary(
        "gradle/wrapper/gradle-wrapper.jar",
        "gradle/wrapper/gradle-wrapper.jar",
    ));

    Manifest::new("root-build", entries)
}

const DISTRIBUTION_FILES: &[&str] = &[
    "src/dev/var/conf/server.yml",
    "src/standard/var/conf/server.yml",
    "src/standard/var/conf/README",
    "src/standard/var/log/README",
    "src/standard/var/run/README",
    "build.gradle",
];

const DISTRIBUTION_BINARY_FILES: &[&str] = &[
    "src/standard/var/conf/keyStore.jks",
    "src/standard/var/conf/trustStore.jks",
];

const APP_FILES: &[&str] = &[
    "src/app.less",
    "src/app.ts",
    "src/helloDirective.ts",
    "src/index.html",
    "typings/globals/angular/index.d.ts",
    "typings/globals/jquery/index.d.ts",
    "typings/index.d.ts",
    "bower.json",
    "gulpfile.js",
    "package.json",
    "tsconfig.json",
    "typings.json",
    "build.gradle",
];

const SERVER_FILES: &[&str] = &["build.gradle"];

/// Flat placement: `projects/{module}/{rel}` → `{slug}-{module}/{rel}`.
fn module_flat(
    ctx: &ProjectContext,
    module: &'static str,
    templated: &[&str],
    binary: &[&str],
) -> Manifest {
    let dir = ctx.module_dir(module);

    let mut entries: Vec<ManifestEntry> = templated
        .iter()
        .map(|f| ManifestEntry::template(format!("projects/{module}/{f}"), format!("{dir}/{f}")))
        .collect();

    entries.extend(
        binary
            .iter()
            .map(|f| ManifestEntry::binary(format!("projects/{module}/{f}"), format!("{dir}/{f}"))),
    );

    Manifest::new(module, entries)
}

/// Java sources for the server module.
///
/// Two placement rules: the database backend files keep their own names
/// under `backend/`; the application entry points are prefixed with the
/// derived class name.
fn server_java(ctx: &ProjectContext) -> Manifest {
    let java_root = format!(
        "{}/src/main/java/{}",
        ctx.module_dir("server"),
        ctx.package_path()
    );

    let mut entries: Vec<ManifestEntry> = ["backend/DatabaseBackend.java", "backend/DatabaseConfiguration.java"]
        .into_iter()
        .map(|f| ManifestEntry::template(format!("projects/server/java/{f}"), format!("{java_root}/{f}")))
        .collect();

    entries.extend(["Application.java", "Configuration.java"].into_iter().map(|f| {
        ManifestEntry::template(
            format!("projects/server/java/{f}"),
            format!("{java_root}/{}{f}", ctx.class_name()),
        )
    }));

    Manifest::new("server-java", entries)
}

/// Root dotfiles, copied verbatim.
fn project_files() -> Manifest {
    Manifest::new(
        "project-files",
        vec![ManifestEntry::binary("gitignore", ".gitignore")],
    )
}

// ── Validation ────────────────────────────────────────────────────────────────

/// Check that no two entries across all manifests target the same output
/// path, and that no manifest is empty.
pub fn validate_disjoint(manifests: &[Manifest]) -> Result<(), DomainError> {
    let mut seen: HashSet<&RelativePath> = HashSet::new();

    for manifest in manifests {
        manifest.validate()?;
        for entry in &manifest.entries {
            if !seen.insert(&entry.output_path) {
                return Err(DomainError::DuplicateOutputPath {
                    path: entry.output_path.to_string(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::context::Answers;

    fn ctx() -> ProjectContext {
        ProjectContext::derive(Answers {
            name: "demo app".into(),
            description: String::new(),
            package: "com.example.demo".into(),
        })
    }

    #[test]
    fn full_manifest_set_is_disjoint() {
        let manifests = all(&ctx());
        assert!(validate_disjoint(&manifests).is_ok());
    }

    #[test]
    fn modules_produce_non_overlapping_trees() {
        let ctx = ctx();
        let all_outputs: Vec<String> = all(&ctx)
            .iter()
            .flat_map(|m| &m.entries)
            .map(|e| e.output_path.to_string())
            .collect();

        for module in MODULES {
            let prefix = format!("{}/", ctx.module_dir(module));
            let in_module: Vec<&String> =
                all_outputs.iter().filter(|p| p.starts_with(&prefix)).collect();
            assert!(!in_module.is_empty(), "no outputs for module {module}");

            // Nothing under this module directory belongs to any other module.
            for other in MODULES.iter().filter(|m| **m != module) {
                let other_prefix = format!("{}/", ctx.module_dir(other));
                assert!(in_module.iter().all(|p| !p.starts_with(&other_prefix)));
            }
        }
    }

    #[test]
    fn root_build_marks_gradlew_executable() {
        let m = root_build();
        let gradlew = m
            .entries
            .iter()
            .find(|e| e.output_path.as_path().ends_with("gradlew"))
            .unwrap();
        assert!(gradlew.executable);

        let bat = m
            .entries
            .iter()
            .find(|e| e.output_path.as_path().ends_with("gradlew.bat"))
            .unwrap();
        assert!(!bat.executable);
    }

    #[test]
    fn wrapper_jar_and_keystores_are_binary() {
        let manifests = all(&ctx());
        let binaries: Vec<String> = manifests
            .iter()
            .flat_map(|m| &m.entries)
            .filter(|e| e.mode == CopyMode::Binary)
            .map(|e| e.output_path.to_string())
            .collect();

        assert!(binaries.contains(&"gradle/wrapper/gradle-wrapper.jar".to_string()));
        assert!(binaries.contains(&"demo-app-distribution/src/standard/var/conf/keyStore.jks".to_string()));
        assert!(binaries.contains(&"demo-app-distribution/src/standard/var/conf/trustStore.jks".to_string()));
        assert!(binaries.contains(&".gitignore".to_string()));
        assert_eq!(binaries.len(), 4);
    }

    #[test]
    fn java_sources_use_both_placement_rules() {
        let m = server_java(&ctx());
        let outputs: Vec<String> = m.entries.iter().map(|e| e.output_path.to_string()).collect();

        assert!(outputs.contains(
            &"demo-app-server/src/main/java/com/example/demo/backend/DatabaseBackend.java".to_string()
        ));
        assert!(outputs.contains(
            &"demo-app-server/src/main/java/com/example/demo/DemoAppApplication.java".to_string()
        ));
        assert!(outputs.contains(
            &"demo-app-server/src/main/java/com/example/demo/DemoAppConfiguration.java".to_string()
        ));
    }

    #[test]
    fn gitignore_is_copied_verbatim_to_dotfile() {
        let m = project_files();
        assert_eq!(m.entries.len(), 1);
        assert_eq!(m.entries[0].mode, CopyMode::Binary);
        assert_eq!(m.entries[0].template_path.to_string(), "gitignore");
        assert_eq!(m.entries[0].output_path.to_string(), ".gitignore");
    }

    #[test]
    fn duplicate_output_path_is_rejected() {
        let dup = Manifest::new(
            "dup",
            vec![
                ManifestEntry::template("a", "out/x"),
                ManifestEntry::template("b", "out/x"),
            ],
        );
        assert!(matches!(
            validate_disjoint(&[dup]),
            Err(DomainError::DuplicateOutputPath { .. })
        ));
    }

    #[test]
    fn empty_manifest_is_rejected() {
        let empty = Manifest::new("empty", vec![]);
        assert!(matches!(
            validate_disjoint(&[empty]),
            Err(DomainError::EmptyManifest { .. })
        ));
    }
}
