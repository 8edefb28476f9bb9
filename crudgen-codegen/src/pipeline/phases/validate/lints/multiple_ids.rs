//! Lint for classes with several identity markers.

use crudgen_ir::marker::names;
use crudgen_manifest::Manifest;

use super::{super::Lint, class_location};
use crate::pipeline::Diagnostic;

/// Lint that warns when a class marks more than one getter as identity.
/// The first one is used.
pub struct MultipleIdsLint;

impl Lint for MultipleIdsLint {
    fn name(&self) -> &'static str {
        "multiple-ids"
    }

    fn description(&self) -> &'static str {
        "Warn about classes with more than one identity property"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for class in &manifest.classes {
            let ids: Vec<&str> = class
                .methods
                .iter()
                .filter(|m| m.markers.iter().any(|marker| marker.name() == names::ID))
                .map(|m| m.name.as_str())
                .collect();

            if ids.len() > 1 {
                let qualified_name = class.qualified_name();
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "'{}' has {} identity properties; '{}' is used",
                            qualified_name,
                            ids.len(),
                            ids[0]
                        ),
                    )
                    .at(class_location(&qualified_name)),
                );
            }
        }
    }
}
