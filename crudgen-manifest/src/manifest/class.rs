//! Class and method declarations.

use serde::{Deserialize, Serialize};

use super::{MarkerEntry, validate::ParseContext};
use crate::Result;

/// Marker whose `crud`/`dto`/`dti` arguments override artifact names.
const CODEGEN_MARKER: &str = "mx.com.inftel.codegen.Codegen";

/// Declared class visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Package,
    Private,
}

/// Where a class is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Nesting {
    #[default]
    TopLevel,
    Member,
    Local,
    Anonymous,
}

/// A `[[class]]` entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClassDecl {
    /// Enclosing package; blank or absent means the default package
    #[serde(default)]
    pub package: String,

    /// Simple class name
    pub name: String,

    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,

    #[serde(default)]
    pub nesting: Nesting,

    /// Superclass, qualified or relative to this class's package
    #[serde(default)]
    pub extends: Option<String>,

    #[serde(default)]
    pub markers: Vec<MarkerEntry>,

    #[serde(default, rename = "method")]
    pub methods: Vec<MethodDecl>,
}

impl ClassDecl {
    /// Fully-qualified class name
    pub fn qualified_name(&self) -> String {
        let package = self.package.trim();
        if package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", package, self.name)
        }
    }

    /// The superclass as a qualified name, resolving a simple name against
    /// this class's package.
    pub fn qualified_extends(&self) -> Option<String> {
        let parent = self.extends.as_deref()?.trim();
        let package = self.package.trim();
        if parent.contains('.') || package.is_empty() {
            Some(parent.to_string())
        } else {
            Some(format!("{}.{}", package, parent))
        }
    }

    /// Whether the class carries the given marker
    pub fn has_marker(&self, name: &str) -> bool {
        self.markers.iter().any(|m| m.name() == name)
    }

    pub(crate) fn validate<'a>(&'a self, ctx: &ParseContext<'a>) -> Result<()> {
        ctx.validate_package(&self.package)?;
        ctx.validate_name(&self.name, "class")?;

        let class_ctx = ctx.push(&self.name);
        if let Some(codegen) = self.markers.iter().find(|m| m.name() == CODEGEN_MARKER) {
            for key in ["crud", "dto", "dti"] {
                if let Some(name) = codegen.str_arg(key).filter(|n| !n.trim().is_empty()) {
                    class_ctx.validate_name(name.trim(), &format!("{} override", key))?;
                }
            }
        }

        for method in &self.methods {
            class_ctx.validate_name(&method.name, "method")?;
        }
        Ok(())
    }
}

/// A `[[class.method]]` entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MethodDecl {
    pub name: String,

    /// Written return type
    #[serde(default = "default_return")]
    pub returns: String,

    /// Written parameter types
    #[serde(default)]
    pub params: Vec<String>,

    #[serde(default, rename = "static")]
    pub is_static: bool,

    #[serde(default)]
    pub markers: Vec<MarkerEntry>,
}

fn default_return() -> String {
    "void".to_string()
}
