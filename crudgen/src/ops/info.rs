//! Info operation - manifest overview.

use std::path::Path;

use crudgen_codegen::{pipeline::Pipeline, plan::GenerationPlan};
use crudgen_manifest::Manifest;
use eyre::{Context, Result};

use crate::reports::{ClassInfo, InfoReport, Stats};

/// Execute the info operation.
///
/// Lists the declared classes with the artifacts the plan assigns them.
pub fn info(manifest: &Manifest, config_path: &Path) -> Result<InfoReport> {
    let mut ctx = Pipeline::new()
        .run(manifest.clone())
        .wrap_err("Pipeline failed")?;
    let metamodel = ctx.take_metamodel()?;
    let plan = ctx.take_plan()?;

    let classes: Vec<ClassInfo> = metamodel
        .iter()
        .map(|class| ClassInfo {
            qualified_name: class.qualified_name.clone(),
            kind: if class.is_entity {
                "entity"
            } else if class.is_embeddable {
                "embeddable"
            } else {
                "class"
            },
            properties: class.properties.len(),
            artifacts: planned_artifacts(&plan, &class.qualified_name),
        })
        .collect();

    let stats = Stats {
        classes: classes.len(),
        entities: metamodel.iter().filter(|c| c.is_entity).count(),
        embeddables: metamodel.iter().filter(|c| c.is_embeddable).count(),
        annotations: manifest.annotations.len(),
        artifacts: plan.artifact_count(),
    };

    Ok(InfoReport {
        config_path: std::fs::canonicalize(config_path)
            .unwrap_or_else(|_| config_path.to_path_buf()),
        output_dir: manifest.output.dir.clone(),
        stats,
        classes,
    })
}

fn planned_artifacts(plan: &GenerationPlan, qualified_name: &str) -> Vec<String> {
    plan.class(qualified_name)
        .map(|planned| {
            planned
                .artifacts
                .iter()
                .map(|a| a.qualified_name.clone())
                .collect()
        })
        .unwrap_or_default()
}
