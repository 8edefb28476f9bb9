//! Analyze phase - builds the generation plan and reports degradations.

use crudgen_ir::{ClassModel, Metamodel, NestingKind, PropertyModel, PropertyRole, Visibility};
use eyre::{Result, eyre};
use tracing::{debug, warn};

use crate::{
    pipeline::{CompilationContext, Diagnostic, Phase},
    plan::GenerationPlan,
};

/// Phase that computes the [`GenerationPlan`] from the metamodel.
///
/// This phase must run after `LowerPhase`. Shapes the emitters handle by
/// leaving something out are reported as warnings.
pub struct AnalyzePhase;

impl Phase for AnalyzePhase {
    fn name(&self) -> &'static str {
        "analyze"
    }

    fn description(&self) -> &'static str {
        "Plan generated artifacts and report degradations"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let metamodel = ctx
            .metamodel
            .as_ref()
            .ok_or_else(|| eyre!("metamodel not set - AnalyzePhase must run after LowerPhase"))?;

        let plan = GenerationPlan::from_metamodel(metamodel);
        let diagnostics = analyze(metamodel);
        for diagnostic in &diagnostics {
            if diagnostic.severity.is_warning() {
                warn!(location = diagnostic.location.as_deref(), "{}", diagnostic.message);
            }
        }
        debug!(
            classes = plan.classes.len(),
            artifacts = plan.artifact_count(),
            "generation planned"
        );

        ctx.diagnostics.extend(diagnostics);
        ctx.plan = Some(plan);
        Ok(())
    }
}

fn analyze(metamodel: &Metamodel) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for class in metamodel.iter().filter(|c| c.is_codegen()) {
        if !class.is_transfer_eligible() {
            if let Some(reason) = ineligibility(class) {
                diagnostics.push(
                    Diagnostic::info(
                        "analyze",
                        format!("'{}' is {}; nothing is generated for it", class.qualified_name, reason),
                    )
                    .at(location(class)),
                );
            }
            continue;
        }

        if class.is_crud_eligible() && class.id_property().is_none() {
            diagnostics.push(
                Diagnostic::warning(
                    "analyze",
                    format!(
                        "entity '{}' has no identity property; find, update and delete are not generated",
                        class.qualified_name
                    ),
                )
                .at(location(class)),
            );
        }

        for property in &class.properties {
            match property.role {
                PropertyRole::Relation(_) => check_relation(metamodel, class, property, &mut diagnostics),
                PropertyRole::Embedded => check_embedded(metamodel, class, property, &mut diagnostics),
                _ => {}
            }
        }
    }

    diagnostics
}

fn check_relation(
    metamodel: &Metamodel,
    class: &ClassModel,
    property: &PropertyModel,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if class.relation_id_taken(property) {
        let message = format!(
            "relation '{0}' of '{1}' would be carried as '{0}Id', which '{1}' already declares; it is left out",
            property.name, class.qualified_name
        );
        diagnostics.push(Diagnostic::warning("analyze", message).at(property_location(class, &property.name)));
        return;
    }

    let message = match metamodel.relation_target(class, property) {
        None => format!(
            "relation '{}' of '{}' refers to undeclared type '{}'; it is left out",
            property.name, class.qualified_name, property.property_type
        ),
        Some(target) if target.id_property().is_none() => format!(
            "relation '{}' of '{}' targets '{}', which has no identity property; it is left out",
            property.name, class.qualified_name, target.qualified_name
        ),
        Some(_) => return,
    };
    diagnostics.push(Diagnostic::warning("analyze", message).at(property_location(class, &property.name)));
}

fn check_embedded(
    metamodel: &Metamodel,
    class: &ClassModel,
    property: &PropertyModel,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let message = match metamodel.embedded_target(class, property) {
        None => format!(
            "embedded '{}' of '{}' refers to undeclared type '{}'; it is left out",
            property.name, class.qualified_name, property.property_type
        ),
        Some(target) if !(target.is_codegen() && target.is_transfer_eligible()) => format!(
            "embedded '{}' of '{}' uses '{}', whose transfer types are not generated",
            property.name, class.qualified_name, target.qualified_name
        ),
        Some(_) => return,
    };
    diagnostics.push(Diagnostic::warning("analyze", message).at(property_location(class, &property.name)));
}

/// Why an entity or embeddable cannot produce artifacts.
fn ineligibility(class: &ClassModel) -> Option<&'static str> {
    if !class.is_entity && !class.is_embeddable {
        // Reported by the codegen-target lint
        return None;
    }
    if class.nesting != NestingKind::TopLevel {
        Some("not a top-level class")
    } else if class.visibility != Visibility::Public {
        Some("not public")
    } else if class.is_abstract {
        Some("abstract")
    } else {
        None
    }
}

fn location(class: &ClassModel) -> String {
    format!("class.{}", class.qualified_name)
}

fn property_location(class: &ClassModel, property: &str) -> String {
    format!("class.{}.{}", class.qualified_name, property)
}
