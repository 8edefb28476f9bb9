//! Java class and interface builder.

use crudgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::Field;

/// Kind of type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
}

impl TypeKind {
    fn keyword(&self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
        }
    }
}

/// Builder for Java classes and interfaces.
///
/// Members are rendered in insertion order, each preceded by a blank line.
/// A member may span several declarations (see [`TypeDecl::fields`]).
#[derive(Debug, Clone)]
pub struct TypeDecl {
    kind: TypeKind,
    name: String,
    modifiers: Vec<String>,
    extends: Vec<String>,
    implements: Vec<String>,
    members: Vec<Vec<CodeFragment>>,
}

impl TypeDecl {
    pub fn new(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            modifiers: Vec::new(),
            extends: Vec::new(),
            implements: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Class, name)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Interface, name)
    }

    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    pub fn public(self) -> Self {
        self.modifier("public")
    }

    pub fn extends(mut self, ty: impl Into<String>) -> Self {
        self.extends.push(ty.into());
        self
    }

    pub fn implements(mut self, ty: impl Into<String>) -> Self {
        self.implements.push(ty.into());
        self
    }

    /// Add a member (method, nested type, single field).
    pub fn member<R: Renderable>(mut self, member: R) -> Self {
        self.members.push(member.to_fragments());
        self
    }

    /// Add several members.
    pub fn members<R: Renderable>(mut self, members: impl IntoIterator<Item = R>) -> Self {
        for member in members {
            self.members.push(member.to_fragments());
        }
        self
    }

    /// Add a group of fields rendered without blank lines between them.
    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        let fragments: Vec<CodeFragment> =
            fields.into_iter().flat_map(|f| f.to_fragments()).collect();
        if !fragments.is_empty() {
            self.members.push(fragments);
        }
        self
    }

    fn header(&self) -> String {
        let mut header = String::new();
        for modifier in &self.modifiers {
            header.push_str(modifier);
            header.push(' ');
        }
        header.push_str(self.kind.keyword());
        header.push(' ');
        header.push_str(&self.name);
        if !self.extends.is_empty() {
            header.push_str(" extends ");
            header.push_str(&self.extends.join(", "));
        }
        if !self.implements.is_empty() {
            header.push_str(" implements ");
            header.push_str(&self.implements.join(", "));
        }
        header.push_str(" {");
        header
    }

    /// Build the declaration as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for TypeDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self
            .members
            .iter()
            .flat_map(|member| std::iter::once(CodeFragment::Blank).chain(member.iter().cloned()))
            .collect();
        vec![CodeFragment::braced(self.header(), body)]
    }
}
