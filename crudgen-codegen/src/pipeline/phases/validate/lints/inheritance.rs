//! Lint for superclass references.

use std::collections::HashSet;

use crudgen_manifest::{ClassDecl, Manifest};

use super::{super::Lint, class_location};
use crate::pipeline::Diagnostic;

/// Lint that checks `extends` chains.
///
/// A superclass missing from the manifest is a warning (its members are not
/// inherited); a cycle is an error.
pub struct InheritanceLint;

impl Lint for InheritanceLint {
    fn name(&self) -> &'static str {
        "inheritance"
    }

    fn description(&self) -> &'static str {
        "Check that superclasses are declared and acyclic"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for class in &manifest.classes {
            let qualified_name = class.qualified_name();
            let Some(parent) = class.qualified_extends() else {
                continue;
            };

            if manifest.class(&parent).is_none() {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "superclass '{}' of '{}' is not declared; its methods are not inherited",
                            parent, qualified_name
                        ),
                    )
                    .at(class_location(&qualified_name)),
                );
            } else if has_cycle(manifest, class) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!("class '{}' inherits from itself", qualified_name),
                    )
                    .at(class_location(&qualified_name)),
                );
            }
        }
    }
}

fn has_cycle(manifest: &Manifest, class: &ClassDecl) -> bool {
    let start = class.qualified_name();
    let mut seen = HashSet::new();
    let mut current = class.qualified_extends();

    while let Some(name) = current {
        if name == start {
            return true;
        }
        if !seen.insert(name.clone()) {
            // A cycle further up that does not include this class
            return false;
        }
        current = manifest.class(&name).and_then(ClassDecl::qualified_extends);
    }
    false
}
