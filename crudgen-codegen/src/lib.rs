//! Shared code generation infrastructure for the crudgen generator.
//!
//! This crate provides the target-neutral pieces used by the emitters
//! (e.g., `crudgen-codegen-java`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`pipeline`] - Compilation pipeline (validate → lower → analyze)
//! - [`plan`] - The generation plan produced by the pipeline
//! - [`generation`] - Generated scaffolding (StarterManifest)
//! - [`language`] - Target-language abstractions (LanguageCodegen, etc.)
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod generation;
pub mod language;
pub mod pipeline;
pub mod plan;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
