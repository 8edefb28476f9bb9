//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{MANIFEST_FILE, Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

impl Manifest {
    /// Parse a crudgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a crudgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    for annotation in &manifest.annotations {
        if annotation.name.trim().is_empty() {
            return Err(ctx
                .source_context()
                .validation_error("annotation name cannot be empty"));
        }
        for segment in annotation.name.split('.') {
            ctx.validate_name(segment, "annotation name segment")?;
        }
    }

    for class in &manifest.classes {
        class.validate(&ctx)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MarkerArg, Nesting, Visibility};

    const SHOP: &str = r#"
[output]
dir = "target/generated-sources/crudgen"

[[annotation]]
name = "com.example.validation.Email"
markers = ["jakarta.validation.Constraint"]

[[class]]
package = "com.example.shop"
name = "Customer"
markers = [
  "jakarta.persistence.Entity",
  { type = "mx.com.inftel.codegen.Codegen", args = { crud = "CustomerRepository" } },
]

[[class.method]]
name = "getId"
returns = "long"
markers = ["jakarta.persistence.Id", "jakarta.persistence.GeneratedValue"]

[[class.method]]
name = "setId"
params = ["long"]

[[class]]
package = "com.example.shop"
name = "Address"
visibility = "package"
nesting = "member"
abstract = true
extends = "BaseValue"
markers = ["jakarta.persistence.Embeddable"]
"#;

    #[test]
    fn test_parse_full_manifest() {
        let manifest: Manifest = SHOP.parse().unwrap();

        assert_eq!(
            manifest.output.dir,
            Path::new("target/generated-sources/crudgen")
        );
        assert_eq!(manifest.annotations.len(), 1);
        assert!(manifest.annotations[0].has_marker("jakarta.validation.Constraint"));
        assert_eq!(manifest.classes.len(), 2);

        let customer = &manifest.classes[0];
        assert_eq!(customer.qualified_name(), "com.example.shop.Customer");
        assert_eq!(customer.visibility, Visibility::Public);
        assert_eq!(customer.nesting, Nesting::TopLevel);
        assert!(!customer.is_abstract);
        assert!(customer.has_marker("jakarta.persistence.Entity"));
        assert_eq!(customer.methods.len(), 2);

        let get_id = &customer.methods[0];
        assert_eq!(get_id.returns, "long");
        assert!(get_id.params.is_empty());
        assert_eq!(get_id.markers.len(), 2);

        let set_id = &customer.methods[1];
        assert_eq!(set_id.returns, "void");
        assert_eq!(set_id.params, vec!["long".to_string()]);

        let codegen = &customer.markers[1];
        assert_eq!(codegen.str_arg("crud"), Some("CustomerRepository"));
    }

    #[test]
    fn test_parse_class_shape() {
        let manifest: Manifest = SHOP.parse().unwrap();
        let address = manifest.class("com.example.shop.Address").unwrap();

        assert_eq!(address.visibility, Visibility::Package);
        assert_eq!(address.nesting, Nesting::Member);
        assert!(address.is_abstract);
        assert_eq!(
            address.qualified_extends().as_deref(),
            Some("com.example.shop.BaseValue")
        );
    }

    #[test]
    fn test_defaults_for_empty_manifest() {
        let manifest: Manifest = "".parse().unwrap();
        assert_eq!(manifest.output.dir, Path::new("generated"));
        assert!(manifest.classes.is_empty());
    }

    #[test]
    fn test_default_package() {
        let manifest: Manifest = "[[class]]\nname = \"Widget\"\n".parse().unwrap();
        let widget = &manifest.classes[0];
        assert_eq!(widget.qualified_name(), "Widget");
    }

    #[test]
    fn test_marker_args() {
        let src = r#"
[[class]]
name = "Widget"

[[class.method]]
name = "getName"
returns = "String"
markers = [{ type = "jakarta.persistence.Column", args = { nullable = false } }]
"#;
        let manifest: Manifest = src.parse().unwrap();
        let marker = &manifest.classes[0].methods[0].markers[0];
        let args: Vec<_> = marker.args().collect();
        assert_eq!(args, vec![(&"nullable".to_string(), &MarkerArg::Bool(false))]);
    }

    #[test]
    fn test_reject_keyword_class_name() {
        let err = Manifest::from_str("[[class]]\nname = \"class\"\n").unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }

    #[test]
    fn test_reject_invalid_method_name() {
        let src = "[[class]]\nname = \"Widget\"\n\n[[class.method]]\nname = \"get-name\"\n";
        let err = Manifest::from_str(src).unwrap_err();
        match *err {
            Error::InvalidIdentifier { context, .. } => {
                assert_eq!(context, "method in 'Widget'");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_reject_keyword_package_segment() {
        let err = Manifest::from_str("[[class]]\npackage = \"com.new\"\nname = \"Widget\"\n")
            .unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }

    #[test]
    fn test_reject_invalid_override() {
        let src = r#"
[[class]]
name = "Widget"
markers = [{ type = "mx.com.inftel.codegen.Codegen", args = { dto = "Widget DTO" } }]
"#;
        let err = Manifest::from_str(src).unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_blank_override_is_allowed() {
        let src = r#"
[[class]]
name = "Widget"
markers = [{ type = "mx.com.inftel.codegen.Codegen", args = { crud = " " } }]
"#;
        assert!(Manifest::from_str(src).is_ok());
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = Manifest::from_str("[[class]]\nname = 42\n").unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = Manifest::from_str("[[class]]\nname = \"Widget\"\ncolour = \"red\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Manifest::from_file("/definitely/not/here/crudgen.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
