use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        write_with_rules(&self.path(base), &self.rules(), || self.render())
    }
}

/// Write content to `path` honoring the overwrite rule.
///
/// The content is only rendered when the file is actually written.
fn write_with_rules(
    path: &Path,
    rules: &FileRules,
    content: impl FnOnce() -> String,
) -> Result<WriteResult> {
    if rules.overwrite == Overwrite::IfMissing && path.exists() {
        return Ok(WriteResult::Skipped);
    }

    write_file(path, &content())?;
    Ok(WriteResult::Written)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    #[default]
    Always,
    /// Only create if file doesn't exist (scaffolding)
    IfMissing,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Greeting;

    impl GeneratedFile for Greeting {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("com").join("example").join("Greeting.java")
        }

        fn render(&self) -> String {
            "public class Greeting {}\n".to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_generated_file_write() {
        let temp = TempDir::new().unwrap();

        let result = Greeting.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        let written = temp.path().join("com/example/Greeting.java");
        assert_eq!(
            fs::read_to_string(written).unwrap(),
            "public class Greeting {}\n"
        );
    }

    #[test]
    fn test_generated_file_overwrites_stale_output() {
        let temp = TempDir::new().unwrap();
        let path = Greeting.path(temp.path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "stale").unwrap();

        let result = Greeting.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "public class Greeting {}\n");
    }

    struct Scaffold;

    impl GeneratedFile for Scaffold {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("crudgen.toml")
        }

        fn rules(&self) -> FileRules {
            FileRules {
                overwrite: Overwrite::IfMissing,
            }
        }

        fn render(&self) -> String {
            "[output]\n".to_string()
        }
    }

    #[test]
    fn test_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();

        let result = Scaffold.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("crudgen.toml")).unwrap(),
            "[output]\n"
        );
    }

    #[test]
    fn test_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("crudgen.toml");
        fs::write(&path, "original").unwrap();

        let result = Scaffold.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }
}
