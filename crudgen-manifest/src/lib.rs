//! Class-descriptor manifest for the crudgen generator.
//!
//! A `crudgen.toml` lists annotation types and classes, with the markers
//! attached to each class and method. Parsing validates Java names and
//! reports problems as [`miette`] diagnostics pointing into the source.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::*;
