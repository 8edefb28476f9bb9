//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the manifest
//! - [`LowerPhase`] - builds the class metamodel
//! - [`AnalyzePhase`] - builds the generation plan

mod analyze;
mod lower;
mod validate;

pub use analyze::AnalyzePhase;
pub use lower::LowerPhase;
pub use validate::{
    CodegenTargetLint, DuplicateClassLint, InheritanceLint, Lint, MultipleIdsLint,
    RoleConflictLint, ValidatePhase,
};
