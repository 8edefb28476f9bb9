//! Starter crudgen.toml generator.

use std::path::{Path, PathBuf};

use crudgen_core::{FileRules, GeneratedFile, Overwrite};
use crudgen_manifest::MANIFEST_FILE;

/// A starter `crudgen.toml` describing one entity and one embeddable.
pub struct StarterManifest {
    pub package: String,
    pub output_dir: String,
    pub overwrite: Overwrite,
}

impl StarterManifest {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            output_dir: "generated".to_string(),
            overwrite: Overwrite::IfMissing,
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<String>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }
}

impl GeneratedFile for StarterManifest {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(MANIFEST_FILE)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: self.overwrite,
        }
    }

    fn render(&self) -> String {
        format!(
            r#"[output]
dir = "{output}"

# Annotation types used as validation constraints:
# [[annotation]]
# name = "{package}.validation.Email"
# markers = ["jakarta.validation.Constraint"]

[[class]]
package = "{package}"
name = "Address"
markers = ["jakarta.persistence.Embeddable", "mx.com.inftel.codegen.Codegen"]

[[class.method]]
name = "getCity"
returns = "java.lang.String"
markers = [{{ type = "jakarta.persistence.Column", args = {{ nullable = false }} }}]

[[class.method]]
name = "setCity"
params = ["java.lang.String"]

[[class]]
package = "{package}"
name = "Customer"
markers = ["jakarta.persistence.Entity", "mx.com.inftel.codegen.Codegen"]

[[class.method]]
name = "getId"
returns = "java.lang.Long"
markers = ["jakarta.persistence.Id", "jakarta.persistence.GeneratedValue"]

[[class.method]]
name = "setId"
params = ["java.lang.Long"]

[[class.method]]
name = "getName"
returns = "java.lang.String"
markers = [
  {{ type = "jakarta.persistence.Column", args = {{ nullable = false }} }},
  {{ type = "jakarta.validation.constraints.Size", args = {{ max = 80 }} }},
]

[[class.method]]
name = "setName"
params = ["java.lang.String"]

[[class.method]]
name = "getAddress"
returns = "{package}.Address"
markers = ["jakarta.persistence.Embedded"]

[[class.method]]
name = "setAddress"
params = ["{package}.Address"]
"#,
            output = self.output_dir,
            package = self.package,
        )
    }
}

#[cfg(test)]
mod tests {
    use crudgen_core::WriteResult;
    use crudgen_manifest::Manifest;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_render_parses_back() {
        let starter = StarterManifest::new("com.example.shop").with_output_dir("src/generated");
        let manifest: Manifest = starter.render().parse().expect("starter should parse");

        assert_eq!(manifest.output.dir, PathBuf::from("src/generated"));
        assert_eq!(manifest.classes.len(), 2);
        assert!(manifest.class("com.example.shop.Customer").is_some());
    }

    #[test]
    fn test_write_if_missing() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(MANIFEST_FILE), "# mine").unwrap();

        let result = StarterManifest::new("com.example").write(temp.path()).unwrap();
        assert_eq!(result, WriteResult::Skipped);

        let result = StarterManifest::new("com.example")
            .with_overwrite(Overwrite::Always)
            .write(temp.path())
            .unwrap();
        assert_eq!(result, WriteResult::Written);
    }
}
