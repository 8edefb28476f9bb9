//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Incremental writer for indented code.
///
/// Declaration nodes are emitted through [`Renderable`]; the `push_`
/// methods cover the few lines written around them.
///
/// # Example
///
/// ```
/// use crudgen_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::java();
/// builder.push_comment("Origin: com.example.Widget");
/// builder.apply_fragment(CodeFragment::braced(
///     "if (entity == null) {",
///     vec![CodeFragment::line("return null;")],
/// ));
///
/// assert_eq!(
///     builder.build(),
///     "// Origin: com.example.Widget\nif (entity == null) {\n    return null;\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add a `//` line comment.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.indent_level += 1;
                for f in body {
                    self.apply_fragment(f);
                }
                self.indent_level -= 1;
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::java();
        builder.push_line("long x = 1L;");
        assert_eq!(builder.build(), "long x = 1L;\n");
    }

    #[test]
    fn test_comment() {
        let mut builder = CodeBuilder::java();
        builder.push_comment("Origin: com.example.Widget");
        assert_eq!(builder.build(), "// Origin: com.example.Widget\n");
    }

    #[test]
    fn test_blank_line_has_no_indentation() {
        let mut builder = CodeBuilder::java();
        builder.apply_fragment(CodeFragment::braced(
            "class A {",
            vec![
                CodeFragment::line("int a;"),
                CodeFragment::Blank,
                CodeFragment::line("int b;"),
            ],
        ));

        assert_eq!(builder.build(), "class A {\n    int a;\n\n    int b;\n}\n");
    }

    #[test]
    fn test_open_block_and_sequence() {
        let mut builder = CodeBuilder::java();
        builder.apply_fragment(CodeFragment::sequence(vec![
            CodeFragment::block("if (a) {", vec![CodeFragment::line("b();")], None),
            CodeFragment::braced("} else {", vec![CodeFragment::line("c();")]),
        ]));

        assert_eq!(builder.build(), "if (a) {\n    b();\n} else {\n    c();\n}\n");
    }

    #[test]
    fn test_emit_nested_fragments() {
        struct Guard;
        impl Renderable for Guard {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::braced(
                    "default void run() {",
                    vec![CodeFragment::braced(
                        "if (entity == null) {",
                        vec![CodeFragment::line(
                            "throw new java.lang.IllegalArgumentException(\"Entity Not Found\");",
                        )],
                    )],
                )]
            }
        }

        let mut builder = CodeBuilder::java();
        builder.emit(&Guard);
        assert_eq!(
            builder.build(),
            "default void run() {\n    if (entity == null) {\n        throw new java.lang.IllegalArgumentException(\"Entity Not Found\");\n    }\n}\n"
        );
    }
}
