//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest hierarchy, making it easier to pass validation
/// context through nested declarations.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "crudgen.toml");
/// ctx.validate_name("Customer", "class")?;
///
/// // For nested validation
/// let nested = ctx.push("com.example.Customer");
/// nested.validate_name("getName", "method")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["com.example.Customer"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a slash-separated string.
    pub fn path_string(&self) -> String {
        self.path.join("/")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "method in 'com.example.Customer'" or just "class" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Validate that a name is a usable Java identifier.
    ///
    /// Checks for reserved keywords and valid identifier format.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_java_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// Validate every segment of a dotted package name.
    pub fn validate_package(&self, package: &str) -> Result<()> {
        if package.trim().is_empty() {
            return Ok(());
        }
        for segment in package.split('.') {
            self.validate_name(segment, "package segment")?;
        }
        Ok(())
    }
}

/// Java reserved words, including the literals and contextual `_`
/// Source: https://docs.oracle.com/javase/specs/jls/se17/html/jls-3.html#jls-3.9
pub(crate) const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "_",
    // Literals
    "true", "false", "null",
];

/// Check if a name is a Java reserved keyword
pub(crate) fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Find the span of a name in the TOML source
/// Searches for the quoted value first (`name = "Customer"`), then any occurrence.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    if name.is_empty() {
        return None;
    }

    let quoted = format!("\"{}\"", name);
    if let Some(pos) = src.find(&quoted) {
        // +1 to skip the opening quote
        return Some(SourceSpan::from((pos + 1, name.len())));
    }

    // Fallback: just find the name anywhere (less precise)
    src.find(name)
        .map(|pos| SourceSpan::from((pos, name.len())))
}

/// Validate that a name is a valid Java identifier
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_digit() => return Some("name must not start with a digit"),
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, underscore or dollar sign"),
    }

    if !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
        return Some("name must contain only letters, digits, underscores and dollar signs");
    }

    if is_java_keyword(name) {
        return Some("name is a Java reserved keyword");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("Customer").is_none());
        assert!(validate_identifier("getName").is_none());
        assert!(validate_identifier("_internal").is_none());
        assert!(validate_identifier("$proxy").is_none());
        assert!(validate_identifier("Order2").is_none());
        assert!(validate_identifier("Ñandú").is_none());
    }

    #[test]
    fn test_reserved_keywords() {
        assert!(validate_identifier("class").is_some());
        assert!(validate_identifier("interface").is_some());
        assert!(validate_identifier("default").is_some());
        assert!(validate_identifier("null").is_some());
        assert!(validate_identifier("_").is_some());
    }

    #[test]
    fn test_invalid_start_character() {
        assert!(validate_identifier("1st").is_some());
        assert!(validate_identifier("-name").is_some());
    }

    #[test]
    fn test_invalid_characters() {
        assert!(validate_identifier("get-name").is_some());
        assert!(validate_identifier("com.example").is_some());
        assert!(validate_identifier("hello world").is_some());
    }

    #[test]
    fn test_empty_name() {
        assert!(validate_identifier("").is_some());
    }

    #[test]
    fn test_is_java_keyword() {
        assert!(is_java_keyword("new"));
        assert!(is_java_keyword("synchronized"));
        assert!(!is_java_keyword("fn"));
        assert!(!is_java_keyword("Customer"));
    }

    #[test]
    fn test_find_name_span_prefers_quoted_value() {
        let src = "# Customer table\nname = \"Customer\"";
        let span = find_name_span(src, "Customer").unwrap();
        assert_eq!(span.offset(), 25);
        assert_eq!(span.len(), 8);
    }

    #[test]
    fn test_find_name_span_fallback() {
        let src = "package = \"com.example.shop\"";
        let span = find_name_span(src, "example").unwrap();
        assert_eq!(span.offset(), 15);
        assert!(find_name_span(src, "missing").is_none());
    }

    #[test]
    fn test_context_for_nested_path() {
        let ctx = ParseContext::new("", "crudgen.toml");
        assert_eq!(ctx.context_for("class"), "class");

        let nested = ctx.push("com.example.Customer");
        assert_eq!(
            nested.context_for("method"),
            "method in 'com.example.Customer'"
        );
    }

    #[test]
    fn test_parse_context_validate_name_keyword() {
        let ctx = ParseContext::new("name = \"class\"", "crudgen.toml");
        let err = ctx.validate_name("class", "class").unwrap_err();
        assert!(err.to_string().contains("reserved keyword"));
    }

    #[test]
    fn test_parse_context_validate_package() {
        let ctx = ParseContext::new("", "crudgen.toml");
        assert!(ctx.validate_package("com.example.shop").is_ok());
        assert!(ctx.validate_package("").is_ok());
        assert!(ctx.validate_package("com.new.shop").is_err());
        assert!(ctx.validate_package("com..shop").is_err());
    }
}
