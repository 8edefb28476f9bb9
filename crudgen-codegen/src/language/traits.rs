//! Target-language code generation traits.

use std::path::Path;

use eyre::Result;

/// Trait for target-language code generators.
///
/// Implement this trait to emit the derived artifacts in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "java")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "java")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Qualified names of the artifacts that were written
    pub written: Vec<String>,
    /// Qualified names of artifacts skipped because a file with the same
    /// name was already produced in this pass
    pub skipped: Vec<String>,
}

impl GenerateResult {
    pub fn is_empty(&self) -> bool {
        self.written.is_empty() && self.skipped.is_empty()
    }
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
