//! Java field builder.

use crudgen_codegen::builder::{CodeFragment, Renderable};

/// A field declaration.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub modifiers: Vec<String>,
    pub initializer: Option<String>,
}

impl Field {
    /// A `private` field.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            modifiers: vec!["private".to_string()],
            initializer: None,
        }
    }

    pub fn final_(mut self) -> Self {
        self.modifiers.push("final".to_string());
        self
    }

    pub fn init(mut self, value: impl Into<String>) -> Self {
        self.initializer = Some(value.into());
        self
    }

    fn declaration(&self) -> String {
        let mut declaration = format!("{} {} {}", self.modifiers.join(" "), self.ty, self.name);
        if let Some(value) = &self.initializer {
            declaration.push_str(" = ");
            declaration.push_str(value);
        }
        declaration.push(';');
        declaration
    }
}

impl Renderable for Field {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.declaration())]
    }
}
