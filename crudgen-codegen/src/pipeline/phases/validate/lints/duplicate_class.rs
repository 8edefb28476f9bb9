//! Lint for duplicate class declarations.

use std::collections::HashSet;

use crudgen_manifest::Manifest;

use super::{super::Lint, class_location};
use crate::pipeline::Diagnostic;

/// Lint that errors when two `[[class]]` entries share a qualified name.
pub struct DuplicateClassLint;

impl Lint for DuplicateClassLint {
    fn name(&self) -> &'static str {
        "duplicate-class"
    }

    fn description(&self) -> &'static str {
        "Detect classes declared more than once"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen = HashSet::new();

        for class in &manifest.classes {
            let qualified_name = class.qualified_name();
            if !seen.insert(qualified_name.clone()) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!("class '{}' is declared more than once", qualified_name),
                    )
                    .at(class_location(&qualified_name)),
                );
            }
        }
    }
}
