//! Core utilities and types for the crudgen generator.
//!
//! This crate provides the generated-file abstraction and the naming
//! helpers shared by the metamodel and the emitters.

mod file;
mod utils;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{capitalize, decapitalize, java_string_literal, package_path, qualify};
