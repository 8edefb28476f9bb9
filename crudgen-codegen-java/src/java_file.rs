//! JavaFile abstraction for structured Java source generation.
//!
//! Every generated source has the same frame: an origin comment naming the
//! persistent class it was derived from, an optional package declaration and
//! one top-level type.

use crudgen_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A structured representation of one Java compilation unit.
///
/// # Example
///
/// ```ignore
/// let file = JavaFile::new("com.example.Customer")
///     .package("com.example")
///     .add(interface)
///     .render();
/// ```
pub struct JavaFile {
    origin: String,
    package: String,
    body: Vec<Vec<CodeFragment>>,
}

impl JavaFile {
    /// Create a file derived from the given qualified class name.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            package: String::new(),
            body: Vec::new(),
        }
    }

    /// Set the package; a blank package leaves the file in the default package.
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with Java indentation (4 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::JAVA)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        builder.push_comment(&format!("Origin: {}", self.origin));

        let package = self.package.trim();
        if !package.is_empty() {
            builder.push_blank();
            builder.push_line(&format!("package {};", package));
        }

        for fragments in &self.body {
            builder.push_blank();
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}
