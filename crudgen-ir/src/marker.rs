//! Declarative markers (annotations) attached to classes and methods.

use std::collections::BTreeMap;

use crudgen_core::java_string_literal;
use serde::Serialize;

/// Fully-qualified names of the markers the extractor understands.
pub mod names {
    pub const CODEGEN: &str = "mx.com.inftel.codegen.Codegen";

    pub const ENTITY: &str = "jakarta.persistence.Entity";
    pub const EMBEDDABLE: &str = "jakarta.persistence.Embeddable";
    pub const ID: &str = "jakarta.persistence.Id";
    pub const GENERATED_VALUE: &str = "jakarta.persistence.GeneratedValue";
    pub const VERSION: &str = "jakarta.persistence.Version";
    pub const COLUMN: &str = "jakarta.persistence.Column";
    pub const JOIN_COLUMN: &str = "jakarta.persistence.JoinColumn";
    pub const EMBEDDED: &str = "jakarta.persistence.Embedded";

    /// Meta-marker identifying a validation constraint annotation type.
    pub const CONSTRAINT: &str = "jakarta.validation.Constraint";
    /// Package of the built-in validation constraints.
    pub const CONSTRAINTS_PACKAGE: &str = "jakarta.validation.constraints";
}

/// A configured marker value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MarkerValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<MarkerValue>),
}

impl MarkerValue {
    /// Render as a Java annotation element value.
    pub fn to_java(&self) -> String {
        match self {
            MarkerValue::Bool(b) => b.to_string(),
            MarkerValue::Int(i) => i.to_string(),
            MarkerValue::Float(f) => f.to_string(),
            MarkerValue::Str(s) => java_string_literal(s),
            MarkerValue::List(items) => {
                let items: Vec<String> = items.iter().map(MarkerValue::to_java).collect();
                format!("{{{}}}", items.join(", "))
            }
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MarkerValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            MarkerValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// One marker occurrence with its configured key/value pairs.
///
/// Values are kept sorted by key so rendering is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Fully-qualified marker type name.
    pub name: String,
    pub values: BTreeMap<String, MarkerValue>,
    /// Whether the marker type is a validation constraint.
    pub constraint: bool,
}

impl Marker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: BTreeMap::new(),
            constraint: false,
        }
    }

    pub fn with_value(mut self, key: impl Into<String>, value: MarkerValue) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn with_constraint(mut self, constraint: bool) -> Self {
        self.constraint = constraint;
        self
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    pub fn bool_value(&self, key: &str) -> Option<bool> {
        self.values.get(key).and_then(MarkerValue::as_bool)
    }

    pub fn str_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(MarkerValue::as_str)
    }

    /// Render as a Java annotation, e.g. `@jakarta.validation.constraints.Size(max = 40)`.
    pub fn to_java(&self) -> String {
        if self.values.is_empty() {
            return format!("@{}", self.name);
        }
        let args: Vec<String> = self
            .values
            .iter()
            .map(|(key, value)| format!("{} = {}", key, value.to_java()))
            .collect();
        format!("@{}({})", self.name, args.join(", "))
    }
}

/// Whether a marker type lives in the built-in constraints package.
pub fn is_builtin_constraint(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(package, _)| package == names::CONSTRAINTS_PACKAGE)
}

/// Find the first marker with the given name.
pub fn find_marker<'a>(markers: &'a [Marker], name: &str) -> Option<&'a Marker> {
    markers.iter().find(|marker| marker.is(name))
}
