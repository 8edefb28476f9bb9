//! Check operation - manifest validation.

use std::path::Path;

use crudgen_codegen::pipeline::{
    CompilationContext, Diagnostic, Phase, Pipeline, Severity, phases::ValidatePhase,
};
use crudgen_manifest::Manifest;
use eyre::{Context, Result};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Validation errors stop the pipeline, so the manifest is validated on its
/// own first and any errors are reported without planning.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport> {
    let mut validated = CompilationContext::new(manifest.clone());
    if ValidatePhase::new().run(&mut validated).is_err() {
        return Ok(report(config_path, &validated.diagnostics, 0));
    }

    let ctx = Pipeline::new()
        .run(manifest.clone())
        .wrap_err("Pipeline failed")?;
    let artifacts = ctx.plan.as_ref().map_or(0, |plan| plan.artifact_count());

    Ok(report(config_path, &ctx.diagnostics, artifacts))
}

fn report(config_path: &Path, diagnostics: &[Diagnostic], artifacts: usize) -> CheckReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        errors,
        warnings,
        infos,
        artifacts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_collects_warnings() {
        let manifest: Manifest = r#"
            [[class]]
            package = "com.example"
            name = "Note"
            markers = ["jakarta.persistence.Entity", "mx.com.inftel.codegen.Codegen"]

            [[class.method]]
            name = "getText"
            returns = "String"
            markers = ["jakarta.persistence.Column"]
        "#
        .parse()
        .unwrap();

        let report = check(&manifest, Path::new("crudgen.toml")).unwrap();

        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("has no identity property"));
        assert_eq!(report.artifacts, 3);
    }

    #[test]
    fn test_check_reports_duplicate_classes() {
        let manifest: Manifest = r#"
            [[class]]
            name = "Twice"

            [[class]]
            name = "Twice"
        "#
        .parse()
        .unwrap();

        let report = check(&manifest, Path::new("crudgen.toml")).unwrap();
        assert!(!report.is_valid());
        assert!(report.errors[0].contains("declared more than once"));
        assert_eq!(report.artifacts, 0);
    }
}
