//! Compilation context passed through pipeline phases.

use crudgen_ir::Metamodel;
use crudgen_manifest::Manifest;
use eyre::{Result, eyre};

use super::diagnostic::{Diagnostic, Severity};
use crate::plan::GenerationPlan;

/// Context passed through all pipeline phases.
///
/// This struct carries the state of compilation through each phase,
/// accumulating results and diagnostics along the way.
#[derive(Debug)]
pub struct CompilationContext {
    /// The manifest being compiled.
    pub manifest: Manifest,
    /// The class models (populated by LowerPhase).
    pub metamodel: Option<Metamodel>,
    /// The artifacts to emit (populated by AnalyzePhase).
    pub plan: Option<GenerationPlan>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new compilation context from a manifest.
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            metamodel: None,
            plan: None,
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Take the metamodel out of the context.
    pub fn take_metamodel(&mut self) -> Result<Metamodel> {
        self.metamodel
            .take()
            .ok_or_else(|| eyre!("metamodel not set - did LowerPhase run?"))
    }

    /// Take the generation plan out of the context.
    pub fn take_plan(&mut self) -> Result<GenerationPlan> {
        self.plan
            .take()
            .ok_or_else(|| eyre!("generation plan not set - did AnalyzePhase run?"))
    }
}
