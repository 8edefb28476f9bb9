//! Lint for getters carrying several persistence role markers.

use crudgen_ir::marker::names;
use crudgen_manifest::Manifest;

use super::{super::Lint, method_location};
use crate::pipeline::Diagnostic;

const ROLE_MARKERS: [&str; 3] = [names::COLUMN, names::JOIN_COLUMN, names::EMBEDDED];

/// Lint that warns when a method carries more than one of the column,
/// join-column and embedded markers. Only the first by priority is used.
pub struct RoleConflictLint;

impl Lint for RoleConflictLint {
    fn name(&self) -> &'static str {
        "role-conflict"
    }

    fn description(&self) -> &'static str {
        "Warn about properties with several role markers"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for class in &manifest.classes {
            for method in &class.methods {
                let roles: Vec<&str> = ROLE_MARKERS
                    .into_iter()
                    .filter(|role| method.markers.iter().any(|m| m.name() == *role))
                    .collect();
                if roles.len() < 2 {
                    continue;
                }

                let qualified_name = class.qualified_name();
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "'{}' in '{}' has several role markers; only '{}' is used",
                            method.name, qualified_name, roles[0]
                        ),
                    )
                    .at(method_location(&qualified_name, &method.name)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflicting_roles_warn() {
        let manifest: Manifest = r#"
            [[class]]
            package = "com.example"
            name = "Order"

            [[class.method]]
            name = "getCustomer"
            returns = "com.example.Customer"
            markers = ["jakarta.persistence.Embedded", "jakarta.persistence.JoinColumn"]

            [[class.method]]
            name = "getTotal"
            returns = "long"
            markers = ["jakarta.persistence.Column"]
        "#
        .parse()
        .unwrap();

        let mut diagnostics = Vec::new();
        RoleConflictLint.check(&manifest, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert!(diagnostics[0].message.contains("jakarta.persistence.JoinColumn"));
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("class.com.example.Order.method.getCustomer")
        );
    }
}
