//! Neutral type descriptors for accessor return and parameter types.

use std::fmt;

use serde::Serialize;

/// The eight primitive kinds plus `void`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Void,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Boolean,
    Char,
}

impl PrimitiveKind {
    /// All primitive kinds, in declaration order.
    pub const ALL: [PrimitiveKind; 9] = [
        PrimitiveKind::Void,
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::Boolean,
        PrimitiveKind::Char,
    ];

    /// The primitive keyword (e.g., "int").
    pub fn keyword(&self) -> &'static str {
        match self {
            PrimitiveKind::Void => "void",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Char => "char",
        }
    }

    /// The fully-qualified name of the boxed counterpart.
    pub fn boxed_name(&self) -> &'static str {
        match self {
            PrimitiveKind::Void => "java.lang.Void",
            PrimitiveKind::Byte => "java.lang.Byte",
            PrimitiveKind::Short => "java.lang.Short",
            PrimitiveKind::Int => "java.lang.Integer",
            PrimitiveKind::Long => "java.lang.Long",
            PrimitiveKind::Float => "java.lang.Float",
            PrimitiveKind::Double => "java.lang.Double",
            PrimitiveKind::Boolean => "java.lang.Boolean",
            PrimitiveKind::Char => "java.lang.Character",
        }
    }

    fn from_keyword(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == s)
    }

    fn from_boxed(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| {
            let boxed = kind.boxed_name();
            boxed == s || boxed.strip_prefix("java.lang.") == Some(s)
        })
    }
}

/// A neutral type descriptor.
///
/// The set is closed: primitives, their boxed counterparts, strings, arrays,
/// references to declared classes, and an unknown fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "lowercase")]
pub enum TypeModel {
    Primitive(PrimitiveKind),
    Boxed(PrimitiveKind),
    String,
    Array(Box<TypeModel>),
    /// A declared class, by erased qualified (or as-written) name.
    Class(String),
    Unknown,
}

impl TypeModel {
    /// Classify a written type such as `long`, `java.lang.Long`,
    /// `byte[]` or `java.util.List<com.example.Tag>`.
    ///
    /// Never fails: anything unrecognized becomes [`TypeModel::Unknown`].
    pub fn normalize(written: &str) -> Self {
        let written = written.trim();

        if let Some(component) = written.strip_suffix("[]") {
            return match Self::normalize(component) {
                TypeModel::Unknown => TypeModel::Unknown,
                component => TypeModel::Array(Box::new(component)),
            };
        }

        if let Some(kind) = PrimitiveKind::from_keyword(written) {
            return TypeModel::Primitive(kind);
        }
        if let Some(kind) = PrimitiveKind::from_boxed(written) {
            return TypeModel::Boxed(kind);
        }
        if written == "java.lang.String" || written == "String" {
            return TypeModel::String;
        }

        let erased = match written.find('<') {
            Some(open) if written.ends_with('>') => written[..open].trim_end(),
            Some(_) => return TypeModel::Unknown,
            None => written,
        };
        if is_type_path(erased) {
            TypeModel::Class(erased.to_string())
        } else {
            TypeModel::Unknown
        }
    }

    /// Map a primitive to its boxed counterpart; identity elsewhere.
    pub fn to_nullable(&self) -> Self {
        match self {
            TypeModel::Primitive(kind) => TypeModel::Boxed(*kind),
            other => other.clone(),
        }
    }

    /// Map a boxed type to its primitive counterpart; identity elsewhere.
    pub fn to_non_nullable(&self) -> Self {
        match self {
            TypeModel::Boxed(kind) => TypeModel::Primitive(*kind),
            other => other.clone(),
        }
    }

    /// True for the primitive variants, which can never hold `null`.
    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeModel::Primitive(_))
    }

    /// The referenced class name, if this is a class reference.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            TypeModel::Class(name) => Some(name),
            _ => None,
        }
    }

    /// Render as Java source.
    pub fn to_code(&self) -> String {
        match self {
            TypeModel::Primitive(kind) => kind.keyword().to_string(),
            TypeModel::Boxed(kind) => kind.boxed_name().to_string(),
            TypeModel::String => "java.lang.String".to_string(),
            TypeModel::Array(component) => format!("{}[]", component.to_code()),
            TypeModel::Class(name) => name.clone(),
            TypeModel::Unknown => "java.lang.Object".to_string(),
        }
    }
}

impl fmt::Display for TypeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_code())
    }
}

/// A dotted sequence of Java identifiers.
fn is_type_path(s: &str) -> bool {
    !s.is_empty() && s.split('.').all(is_identifier)
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
