//! Name derivation rules.
//!
//! Project names are free text; everything derived from them (Java class
//! names, module directory names) requires strict token sets.  A single
//! tokenization rule ([`decompose`]) feeds both derivations so the derived
//! names always agree on word boundaries.
//!
//! | Input                      | `camelcase`  | `slugify`        |
//! |----------------------------|--------------|------------------|
//! | `"my cool app"`            | `MyCoolApp`  | `my-cool-app`    |
//! | `"My Cool App"`            | `MyCoolApp`  | `My-Cool-App`    |
//! | `"dropwizard-angular 2.0"` | `DropwizardAngular` | `dropwizard-angular` |
//! | `"123"`                    | `""`         | `""`             |
//!
//! Note that `slugify` joins the decomposed words without lowercasing them.
//! Slugs are conventionally lowercase, so this looks like a bug, but it is
//! the observed behavior of the system this replaces and downstream module
//! directory names depend on it staying stable.

/// Split a free-text name into its alphabetic words.
///
/// Every character that is not an ASCII letter acts as a separator; runs of
/// separators collapse.  An input with no letters at all yields an empty
/// vector.
pub fn decompose(name: &str) -> Vec<String> {
    name.chars()
        .map(|c| if c.is_ascii_alphabetic() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Derive a PascalCase identifier from a free-text name.
///
/// Each decomposed word has its first character uppercased; the remainder is
/// preserved as-is (mixed-case interiors like `"dB"` are kept, not
/// lowercased).  An input that decomposes to nothing yields `""` — callers
/// must tolerate an empty class name.
pub fn camelcase(name: &str) -> String {
    decompose(name)
        .into_iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::new();
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Derive a hyphen-joined slug from a free-text name.
///
/// This is a join, not a case transform: words keep whatever casing
/// [`decompose`] produced.  Empty decompose output yields `""`.
pub fn slugify(name: &str) -> String {
    decompose(name).join("-")
}
