//! Built-in lints for manifest validation.

mod codegen_target;
mod duplicate_class;
mod inheritance;
mod multiple_ids;
mod role_conflict;

pub use codegen_target::CodegenTargetLint;
pub use duplicate_class::DuplicateClassLint;
pub use inheritance::InheritanceLint;
pub use multiple_ids::MultipleIdsLint;
pub use role_conflict::RoleConflictLint;

/// Location of a class in diagnostics.
fn class_location(qualified_name: &str) -> String {
    format!("class.{}", qualified_name)
}

/// Location of a method in diagnostics.
fn method_location(qualified_name: &str, method: &str) -> String {
    format!("class.{}.method.{}", qualified_name, method)
}
