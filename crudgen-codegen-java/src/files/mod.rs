//! Generated Java sources, one [`GeneratedFile`](crudgen_core::GeneratedFile) per artifact.

use std::path::{Path, PathBuf};

use crudgen_codegen::builder::CodeFragment;
use crudgen_core::package_path;

mod crud;
mod dti;
mod dto;
mod query_context;

pub use crud::CrudInterface;
pub use dti::TransferInterface;
pub use dto::TransferClass;
pub use query_context::{count_context, list_context};

/// `<base>/<package path>/<name>.java`
pub(crate) fn source_path(base: &Path, package: &str, name: &str) -> PathBuf {
    base.join(package_path(package))
        .join(format!("{}.java", name))
}

/// An `if (...) {` block followed by its `} else {` branch.
pub(crate) fn if_else(
    header: impl Into<String>,
    then: Vec<CodeFragment>,
    otherwise: Vec<CodeFragment>,
) -> CodeFragment {
    CodeFragment::sequence(vec![
        CodeFragment::block(header, then, None),
        CodeFragment::braced("} else {", otherwise),
    ])
}

/// Statement raising the not-found failure for a missing row.
pub(crate) const ENTITY_NOT_FOUND: &str =
    "throw new java.lang.IllegalArgumentException(\"Entity Not Found\");";

/// Statement raising the failure for an unresolvable relation id.
pub(crate) const RELATION_NOT_FOUND: &str =
    "throw new java.lang.IllegalArgumentException(\"Relation Not Found\");";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_path() {
        let path = source_path(Path::new("out"), "com.example.shop", "CustomerCRUD");
        assert_eq!(path, Path::new("out/com/example/shop/CustomerCRUD.java"));
    }

    #[test]
    fn test_if_else() {
        let mut builder = crudgen_codegen::builder::CodeBuilder::java();
        builder.apply_fragment(if_else(
            "if (a) {",
            vec![CodeFragment::line("b();")],
            vec![CodeFragment::line("c();")],
        ));
        assert_eq!(builder.build(), "if (a) {\n    b();\n} else {\n    c();\n}\n");
    }

    #[test]
    fn test_source_path_default_package() {
        let path = source_path(Path::new("out"), "", "CustomerDTO");
        assert_eq!(path, Path::new("out/CustomerDTO.java"));
    }
}
