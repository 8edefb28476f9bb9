//! Java method builder.

use crudgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a Java method.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for Java methods and constructors.
///
/// A method without body statements renders as an abstract declaration
/// ending in `;`.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    annotations: Vec<String>,
    modifiers: Vec<String>,
    return_type: Option<String>,
    params: Vec<Param>,
    body: Option<Vec<CodeFragment>>,
}

impl Method {
    /// A method returning `void` until [`Method::returns`] is called.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            modifiers: Vec::new(),
            return_type: Some("void".to_string()),
            params: Vec::new(),
            body: None,
        }
    }

    /// A constructor for the named type.
    pub fn constructor(type_name: impl Into<String>) -> Self {
        Self {
            return_type: None,
            ..Self::new(type_name)
        }
    }

    /// Add an annotation, written without the leading `@`.
    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    /// Add a rendered annotation such as `@java.lang.Override`.
    pub fn annotation_code(mut self, code: impl Into<String>) -> Self {
        let code = code.into();
        self.annotations
            .push(code.strip_prefix('@').map(str::to_string).unwrap_or(code));
        self
    }

    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    pub fn public(self) -> Self {
        self.modifier("public")
    }

    /// `default` interface method.
    pub fn default_method(self) -> Self {
        self.modifier("default")
    }

    pub fn static_(self) -> Self {
        self.modifier("static")
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Add a statement line to the body.
    pub fn body_line(self, line: impl Into<String>) -> Self {
        self.body_fragment(CodeFragment::Line(line.into()))
    }

    /// Add a nested fragment (e.g., an `if` block) to the body.
    pub fn body_fragment(mut self, fragment: CodeFragment) -> Self {
        self.body.get_or_insert_with(Vec::new).push(fragment);
        self
    }

    /// Add several fragments to the body.
    pub fn body_fragments(mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        self.body.get_or_insert_with(Vec::new).extend(fragments);
        self
    }

    fn signature(&self) -> String {
        let mut signature = String::new();
        for modifier in &self.modifiers {
            signature.push_str(modifier);
            signature.push(' ');
        }
        if let Some(ret) = &self.return_type {
            signature.push_str(ret);
            signature.push(' ');
        }
        let params = self
            .params
            .iter()
            .map(|p| format!("{} {}", p.ty, p.name))
            .collect::<Vec<_>>()
            .join(", ");
        signature.push_str(&format!("{}({})", self.name, params));
        signature
    }

    /// Build the method as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .annotations
            .iter()
            .map(|a| CodeFragment::Line(format!("@{}", a)))
            .collect();

        match &self.body {
            Some(body) => fragments.push(CodeFragment::braced(
                format!("{} {{", self.signature()),
                body.clone(),
            )),
            None => fragments.push(CodeFragment::Line(format!("{};", self.signature()))),
        }
        fragments
    }
}
