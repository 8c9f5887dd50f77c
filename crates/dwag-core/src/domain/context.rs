//! User answers and the derived, immutable project context.
//!
//! The prompt phase produces an [`Answers`] value; [`ProjectContext::derive`]
//! computes the two derived names exactly once and the result is read-only
//! input to every subsequent materialization step.  There is deliberately no
//! shared mutable state accumulating across phases — the context is threaded
//! by reference.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::naming::{camelcase, slugify};

/// Raw user input collected by the prompt phase.
///
/// No structural constraints are enforced beyond the non-empty defaults the
/// prompt layer supplies; `package` in particular is taken on faith as a
/// reverse-domain qualifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    /// Free-text project name, e.g. `"my cool app"`.
    pub name: String,
    /// Free-text project description; may be empty.
    pub description: String,
    /// Java package qualifier, e.g. `"com.foobar.application"`.
    pub package: String,
}

impl Answers {
    /// Default package qualifier offered by the prompt phase.
    pub const DEFAULT_PACKAGE: &'static str = "com.foobar.application";
}

/// [`Answers`] extended with the derived names.
///
/// Immutable once computed.  Also acts as the substitution context for
/// template rendering: every recognized `{{placeholder}}` maps to one of its
/// fields.
///
/// ## Placeholders
///
/// | Placeholder       | Source                  |
/// |-------------------|-------------------------|
/// | `{{name}}`        | `answers.name`          |
/// | `{{description}}` | `answers.description`   |
/// | `{{package}}`     | `answers.package`       |
/// | `{{className}}`   | `camelcase(name)`       |
/// | `{{slug}}`        | `slugify(name)`         |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    answers: Answers,
    class_name: String,
    slug: String,
    variables: HashMap<String, String>,
}

impl ProjectContext {
    /// Compute the derived names from raw answers.
    ///
    /// Both derivations share one tokenization rule, so the class name and
    /// the slug always agree on word boundaries.  A name with no letters
    /// produces empty derived names; materialization still works, the
    /// generated identifiers are just degenerate.
    pub fn derive(answers: Answers) -> Self {
        let class_name = camelcase(&answers.name);
        let slug = slugify(&answers.name);

        let mut variables = HashMap::new();
        variables.insert("name".to_string(), answers.name.clone());
        variables.insert("description".to_string(), answers.description.clone());
        variables.insert("package".to_string(), answers.package.clone());
        variables.insert("className".to_string(), class_name.clone());
        variables.insert("slug".to_string(), slug.clone());

        Self {
            answers,
            class_name,
            slug,
            variables,
        }
    }

    pub fn name(&self) -> &str {
        &self.answers.name
    }

    pub fn description(&self) -> &str {
        &self.answers.description
    }

    pub fn package(&self) -> &str {
        &self.answers.package
    }

    /// PascalCase identifier used as a filename/type-name prefix.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Hyphen-joined fragment used to prefix module directory names.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// The package qualifier as a directory path (`.` replaced by `/`).
    pub fn package_path(&self) -> String {
        self.answers.package.replace('.', "/")
    }

    /// Directory name for a generated module: `{slug}-{module}`.
    pub fn module_dir(&self, module: &str) -> String {
        format!("{}-{}", self.slug, module)
    }

    /// Look up a substitution variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{placeholder}}` tokens.
    ///
    /// Pure text-to-text; file I/O lives in the application layer so this
    /// rule is testable on its own.  Unrecognized placeholders are left
    /// untouched in the output — substitution never silently drops text and
    /// never errors.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}
