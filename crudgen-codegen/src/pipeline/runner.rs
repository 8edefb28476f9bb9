//! Pipeline orchestrator.

use crudgen_manifest::Manifest;
use eyre::Result;
use tracing::debug;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{AnalyzePhase, LowerPhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// The pipeline runs the built-in phases (validate, lower, analyze) followed
/// by any user phases, calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(SnapshotPlugin::with_output_dir(".crudgen/debug"))
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(manifest)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with default built-in phases.
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on a manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally, e.g. when a lint reports
    /// an error-level diagnostic.
    pub fn run(&self, manifest: Manifest) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(manifest);

        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(ValidatePhase::new()),
            Box::new(LowerPhase),
            Box::new(AnalyzePhase),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        debug!(phase = phase_name, "running phase");

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        debug!(
            phase = phase_name,
            diagnostics = ctx.diagnostics.len(),
            "phase finished"
        );
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::pipeline::Diagnostic;

    struct CountingPlugin {
        before_count: Arc<AtomicUsize>,
        after_count: Arc<AtomicUsize>,
    }

    impl CountingPlugin {
        fn new() -> (Self, Arc<AtomicUsize>, Arc<AtomicUsize>) {
            let before = Arc::new(AtomicUsize::new(0));
            let after = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    before_count: before.clone(),
                    after_count: after.clone(),
                },
                before,
                after,
            )
        }
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn make_test_manifest() -> Manifest {
        r#"
            [[class]]
            package = "com.example"
            name = "Customer"
            markers = ["jakarta.persistence.Entity", "mx.com.inftel.codegen.Codegen"]

            [[class.method]]
            name = "getId"
            returns = "long"
            markers = ["jakarta.persistence.Id"]

            [[class.method]]
            name = "setId"
            params = ["long"]
        "#
        .parse()
        .expect("Failed to parse test manifest")
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let ctx = Pipeline::new()
            .run(make_test_manifest())
            .expect("pipeline should succeed");

        assert!(ctx.metamodel.is_some());
        let plan = ctx.plan.as_ref().expect("plan should be set");
        assert_eq!(plan.artifact_count(), 3);
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let (plugin, before_count, after_count) = CountingPlugin::new();

        let pipeline = Pipeline::new().plugin(plugin);
        let _ = pipeline
            .run(make_test_manifest())
            .expect("pipeline should succeed");

        // 3 built-in phases = 3 before + 3 after hooks
        assert_eq!(before_count.load(Ordering::SeqCst), 3);
        assert_eq!(after_count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_pipeline_stops_on_validation_error() {
        let manifest: Manifest = r#"
            [[class]]
            package = "com.example"
            name = "Customer"

            [[class]]
            package = "com.example"
            name = "Customer"
        "#
        .parse()
        .unwrap();

        let (plugin, before_count, _) = CountingPlugin::new();
        let result = Pipeline::new().plugin(plugin).run(manifest);

        assert!(result.is_err());
        assert_eq!(before_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_user_phase_runs_last() {
        struct PlanCheck;
        impl Phase for PlanCheck {
            fn name(&self) -> &'static str {
                "plan-check"
            }
            fn description(&self) -> &'static str {
                "Checks the plan is already built"
            }
            fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
                if ctx.plan.is_some() {
                    ctx.diagnostics
                        .push(Diagnostic::info("plan-check", "plan ready"));
                }
                Ok(())
            }
        }

        let ctx = Pipeline::new()
            .phase(PlanCheck)
            .run(make_test_manifest())
            .unwrap();
        assert!(ctx.diagnostics.iter().any(|d| d.message == "plan ready"));
    }
}
