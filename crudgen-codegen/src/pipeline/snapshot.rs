//! Pipeline snapshot plugin for debugging.
//!
//! Captures the pipeline state after each phase so the metamodel and the
//! generation plan can be inspected as JSON.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crudgen_ir::Metamodel;
use eyre::Result;
use serde::Serialize;

use super::{CompilationContext, Diagnostic, Plugin};
use crate::plan::GenerationPlan;

/// A snapshot of the pipeline state at a specific phase.
#[derive(Debug, Serialize)]
pub struct PhaseSnapshot<'a> {
    /// The phase that just completed.
    pub phase: &'a str,

    /// The class models (available after the "lower" phase).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metamodel: Option<&'a Metamodel>,

    /// The generation plan (available after the "analyze" phase).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<&'a GenerationPlan>,

    /// Diagnostics collected so far.
    pub diagnostics: &'a [Diagnostic],
}

impl<'a> PhaseSnapshot<'a> {
    pub fn capture(phase: &'a str, ctx: &'a CompilationContext) -> Self {
        Self {
            phase,
            metamodel: ctx.metamodel.as_ref(),
            plan: ctx.plan.as_ref(),
            diagnostics: &ctx.diagnostics,
        }
    }
}

/// A plugin that writes the pipeline state after each phase to
/// `<dir>/<phase>.json`.
///
/// Used by `crudgen generate --snapshots <dir>`.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().plugin(SnapshotPlugin::with_output_dir(".crudgen/debug"));
/// let ctx = pipeline.run(manifest)?;
/// ```
pub struct SnapshotPlugin {
    output_dir: PathBuf,
}

impl SnapshotPlugin {
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

fn write_snapshot(dir: &Path, snapshot: &PhaseSnapshot<'_>) -> Result<()> {
    fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(dir.join(format!("{}.json", snapshot.phase)), json)?;
    Ok(())
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        write_snapshot(&self.output_dir, &PhaseSnapshot::capture(phase, ctx))
    }
}

#[cfg(test)]
mod tests {
    use crudgen_manifest::Manifest;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_writes_state_per_phase() {
        let temp = TempDir::new().unwrap();
        let plugin = SnapshotPlugin::with_output_dir(temp.path());
        let mut ctx = CompilationContext::new(Manifest::default());

        plugin.on_after_phase("validate", &mut ctx).unwrap();
        ctx.metamodel = Some(Metamodel::new());
        plugin.on_after_phase("lower", &mut ctx).unwrap();

        let validate = std::fs::read_to_string(temp.path().join("validate.json")).unwrap();
        let lower = std::fs::read_to_string(temp.path().join("lower.json")).unwrap();
        assert!(!validate.contains("metamodel"));
        assert!(lower.contains("\"metamodel\""));
    }

    #[test]
    fn test_writes_json_files() {
        let temp = TempDir::new().unwrap();
        let plugin = SnapshotPlugin::with_output_dir(temp.path().join("debug"));
        let mut ctx = CompilationContext::new(Manifest::default());
        ctx.diagnostics
            .push(Diagnostic::warning("validate", "something odd"));

        plugin.on_after_phase("validate", &mut ctx).unwrap();

        let json = std::fs::read_to_string(temp.path().join("debug/validate.json")).unwrap();
        assert!(json.contains("\"phase\": \"validate\""));
        assert!(json.contains("something odd"));
        assert!(!json.contains("metamodel"));
    }
}
