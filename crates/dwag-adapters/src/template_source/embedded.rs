//! The compiled-in template payload.
//!
//! Every file under `templates/` is embedded at build time, so the release
//! binary scaffolds a project with no companion files on disk.  The table
//! below is the authoritative list; a manifest entry naming a path missing
//! here is a packaging bug caught by the tests.

use std::borrow::Cow;
use std::path::Path;

use dwag_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::RelativePath,
    error::DwagResult,
};

macro_rules! payload {
    ($path:literal) => {
        (
            $path,
            include_bytes!(concat!("../../templates/", $path)) as &'static [u8],
        )
    };
}

static PAYLOAD: &[(&str, &'static [u8])] = &[
    payload!("build.gradle"),
    payload!("gradle.properties"),
    payload!("gradlew"),
    payload!("gradlew.bat"),
    payload!("settings.gradle"),
    payload!("gitignore"),
    payload!("gradle/idea.gradle"),
    payload!("gradle/node.gradle"),
    payload!("gradle/repositories.gradle"),
    payload!("gradle/wrapper/gradle-wrapper.jar"),
    payload!("gradle/wrapper/gradle-wrapper.properties"),
    payload!("projects/distribution/build.gradle"),
    payload!("projects/distribution/src/dev/var/conf/server.yml"),
    payload!("projects/distribution/src/standard/var/conf/README"),
    payload!("projects/distribution/src/standard/var/conf/keyStore.jks"),
    payload!("projects/distribution/src/standard/var/conf/server.yml"),
    payload!("projects/distribution/src/standard/var/conf/trustStore.jks"),
    payload!("projects/distribution/src/standard/var/log/README"),
    payload!("projects/distribution/src/standard/var/run/README"),
    payload!("projects/app/bower.json"),
    payload!("projects/app/build.gradle"),
    payload!("projects/app/gulpfile.js"),
    payload!("projects/app/package.json"),
    payload!("projects/app/tsconfig.json"),
    payload!("projects/app/typings.json"),
    payload!("projects/app/src/app.less"),
    payload!("projects/app/src/app.ts"),
    payload!("projects/app/src/helloDirective.ts"),
    payload!("projects/app/src/index.html"),
    payload!("projects/app/typings/index.d.ts"),
    payload!("projects/app/typings/globals/angular/index.d.ts"),
    payload!("projects/app/typings/globals/jquery/index.d.ts"),
    payload!("projects/server/build.gradle"),
    payload!("projects/server/java/Application.java"),
    payload!("projects/server/java/Configuration.java"),
    payload!("projects/server/java/backend/DatabaseBackend.java"),
    payload!("projects/server/java/backend/DatabaseConfiguration.java"),
];

/// Template source backed by the embedded payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }

    /// All payload paths, for diagnostics.
    pub fn paths() -> impl Iterator<Item = &'static str> {
        PAYLOAD.iter().map(|(path, _)| *path)
    }
}

impl TemplateSource for EmbeddedTemplates {
    fn read(&self, path: &RelativePath) -> DwagResult<Cow<'static, [u8]>> {
        PAYLOAD
            .iter()
            .find(|(key, _)| Path::new(key) == path.as_path())
            .map(|(_, bytes)| Cow::Borrowed(*bytes))
            .ok_or_else(|| {
                ApplicationError::TemplateNotFound {
                    path: path.to_string(),
                }
                .into()
            })
    }
}
