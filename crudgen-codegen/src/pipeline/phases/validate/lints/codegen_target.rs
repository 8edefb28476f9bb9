//! Lint for generation markers on classes that cannot produce artifacts.

use crudgen_ir::marker::names;
use crudgen_manifest::Manifest;

use super::{super::Lint, class_location};
use crate::pipeline::Diagnostic;

/// Lint that notes classes opting into generation while being neither an
/// entity nor an embeddable.
pub struct CodegenTargetLint;

impl Lint for CodegenTargetLint {
    fn name(&self) -> &'static str {
        "codegen-target"
    }

    fn description(&self) -> &'static str {
        "Note generation markers on classes that are neither entities nor embeddables"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for class in &manifest.classes {
            if class.has_marker(names::CODEGEN)
                && !class.has_marker(names::ENTITY)
                && !class.has_marker(names::EMBEDDABLE)
            {
                let qualified_name = class.qualified_name();
                diagnostics.push(
                    Diagnostic::info(
                        "validate",
                        format!(
                            "'{}' is neither an entity nor an embeddable; nothing is generated for it",
                            qualified_name
                        ),
                    )
                    .at(class_location(&qualified_name)),
                );
            }
        }
    }
}
