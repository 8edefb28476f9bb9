//! Manifest types and parsing for crudgen.toml files.

mod class;
mod file;
mod marker;
mod parse;
mod validate;

use std::path::PathBuf;

pub use class::{ClassDecl, MethodDecl, Nesting, Visibility};
pub use file::CrudgenToml;
pub use marker::{MarkerArg, MarkerEntry};
pub use parse::parse_manifest;
use serde::{Deserialize, Serialize};
pub use validate::ParseContext;

/// Default manifest filename
pub const MANIFEST_FILE: &str = "crudgen.toml";

/// Root manifest for crudgen.toml
///
/// Each `[[class]]` entry describes one class as the host reflection
/// facility would see it: its markers and its methods.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Annotation type declarations
    #[serde(default, rename = "annotation")]
    pub annotations: Vec<AnnotationDecl>,

    /// Class declarations, in declaration order
    #[serde(default, rename = "class")]
    pub classes: Vec<ClassDecl>,
}

impl Manifest {
    /// Find a class by fully-qualified name
    pub fn class(&self, qualified_name: &str) -> Option<&ClassDecl> {
        self.classes
            .iter()
            .find(|c| c.qualified_name() == qualified_name)
    }

    /// Find an annotation declaration by fully-qualified name
    pub fn annotation(&self, name: &str) -> Option<&AnnotationDecl> {
        self.annotations.iter().find(|a| a.name == name)
    }
}

/// The `[output]` section
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory generated sources are written to
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("generated")
}

/// An `[[annotation]]` entry declaring an annotation type and its own markers
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnnotationDecl {
    /// Fully-qualified annotation type name
    pub name: String,

    /// Meta-markers on the annotation type (e.g. `jakarta.validation.Constraint`)
    #[serde(default)]
    pub markers: Vec<MarkerEntry>,
}

impl AnnotationDecl {
    /// Whether the annotation type carries the given meta-marker
    pub fn has_marker(&self, name: &str) -> bool {
        self.markers.iter().any(|m| m.name() == name)
    }
}
