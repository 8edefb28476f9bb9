//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{path::Path, process::Command};

use eyre::{Result, eyre};

/// Error from compile checking.
#[derive(Debug)]
pub struct CompileError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CompileError {}

/// Trait for verifying generated code compiles.
pub trait CompileChecker {
    /// Check that the sources in the given directory compile.
    fn check(&self, dir: &Path) -> Result<(), CompileError>;
}

/// Java compile checker using `javac`.
///
/// The generated sources reference the Jakarta Persistence and Bean
/// Validation APIs, so `classpath` must point at their jars.
pub struct JavacChecker {
    pub classpath: String,
}

impl CompileChecker for JavacChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        let sources = java_sources(dir).map_err(|e| CompileError {
            message: format!("Failed to list sources: {}", e),
            output: String::new(),
        })?;
        let classes = dir.join(".classes");

        let output = Command::new("javac")
            .arg("-cp")
            .arg(&self.classpath)
            .arg("-d")
            .arg(&classes)
            .args(&sources)
            .output()
            .map_err(|e| CompileError {
                message: format!("Failed to run javac: {}", e),
                output: String::new(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            Err(CompileError {
                message: "javac failed".to_string(),
                output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
            })
        }
    }
}

/// All `.java` files below `dir`, sorted.
pub fn java_sources(dir: &Path) -> std::io::Result<Vec<std::path::PathBuf>> {
    let mut found = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(current) = pending.pop() {
        for entry in std::fs::read_dir(&current)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "java") {
                found.push(path);
            }
        }
    }
    found.sort();
    Ok(found)
}

/// Generate code into a temporary directory and return it.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}

/// Run a generator and check that its output compiles.
pub fn assert_generates_valid_code<C>(
    generate: impl FnOnce(&Path) -> Result<()>,
    checker: &C,
) -> Result<()>
where
    C: CompileChecker,
{
    let temp_dir = generate_to_temp(generate)?;

    checker.check(temp_dir.path()).map_err(|e| {
        eprintln!("Generated files in {}:", temp_dir.path().display());
        if let Ok(sources) = java_sources(temp_dir.path()) {
            for source in sources {
                eprintln!("  {}", source.display());
            }
        }
        eyre!("Compile check failed: {}", e)
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_sources_recurses_and_sorts() {
        let temp = generate_to_temp(|dir| {
            std::fs::create_dir_all(dir.join("com/example"))?;
            std::fs::write(dir.join("com/example/B.java"), "")?;
            std::fs::write(dir.join("com/example/A.java"), "")?;
            std::fs::write(dir.join("notes.txt"), "")?;
            Ok(())
        })
        .unwrap();

        let sources = java_sources(temp.path()).unwrap();
        let names: Vec<_> = sources
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["A.java", "B.java"]);
    }
}
