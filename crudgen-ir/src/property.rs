//! Logical properties derived from accessor pairs.

use crudgen_core::capitalize;
use serde::Serialize;

use crate::{AccessorPair, Marker, MethodModel, TypeModel, marker::names};

/// Column-level attributes read from a column or join-column marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnAttrs {
    pub nullable: bool,
    pub insertable: bool,
    pub updatable: bool,
}

impl ColumnAttrs {
    /// Read attributes, defaulting each to `true` when the marker omits it.
    pub fn from_marker(marker: &Marker) -> Self {
        Self {
            nullable: marker.bool_value("nullable").unwrap_or(true),
            insertable: marker.bool_value("insertable").unwrap_or(true),
            updatable: marker.bool_value("updatable").unwrap_or(true),
        }
    }
}

impl Default for ColumnAttrs {
    fn default() -> Self {
        Self {
            nullable: true,
            insertable: true,
            updatable: true,
        }
    }
}

/// The persistence role of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PropertyRole {
    /// A scalar column.
    Column(ColumnAttrs),
    /// A to-one relation persisted as the target's identity.
    Relation(ColumnAttrs),
    /// An embedded value.
    Embedded,
    /// No recognized role marker.
    Unclassified,
}

impl PropertyRole {
    /// Classify from getter markers. Column wins over relation, which wins
    /// over embedded.
    pub fn classify(markers: &[Marker]) -> Self {
        let find = |name: &str| markers.iter().find(|marker| marker.is(name));
        if let Some(column) = find(names::COLUMN) {
            PropertyRole::Column(ColumnAttrs::from_marker(column))
        } else if let Some(join) = find(names::JOIN_COLUMN) {
            PropertyRole::Relation(ColumnAttrs::from_marker(join))
        } else if find(names::EMBEDDED).is_some() {
            PropertyRole::Embedded
        } else {
            PropertyRole::Unclassified
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyRole::Column(_) => "column",
            PropertyRole::Relation(_) => "relation",
            PropertyRole::Embedded => "embedded",
            PropertyRole::Unclassified => "unclassified",
        }
    }

    fn attrs(&self) -> Option<&ColumnAttrs> {
        match self {
            PropertyRole::Column(attrs) | PropertyRole::Relation(attrs) => Some(attrs),
            _ => None,
        }
    }
}

/// An accessor name; `present` is false when it was synthesized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Accessor {
    pub name: String,
    pub present: bool,
}

/// One logical property of a class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyModel {
    pub name: String,
    pub capitalized_name: String,
    pub property_type: TypeModel,
    pub getter: Accessor,
    pub setter: Accessor,
    pub id: bool,
    pub generated: bool,
    pub version: bool,
    pub role: PropertyRole,
    /// Validation constraint markers found on the getter.
    pub validations: Vec<Marker>,
}

impl PropertyModel {
    /// Build a property from a matched accessor pair.
    ///
    /// Roles come from the getter's markers; a setter-only property is
    /// always unclassified.
    pub fn from_pair(pair: &AccessorPair<'_>) -> Self {
        let capitalized_name = capitalize(&pair.property);

        let property_type = match (pair.getter, pair.setter) {
            (Some(getter), _) => getter.return_type.clone(),
            (None, Some(setter)) => setter
                .param_types
                .first()
                .cloned()
                .unwrap_or(TypeModel::Unknown),
            (None, None) => TypeModel::Unknown,
        };

        let markers: &[Marker] = pair.getter.map(|g| g.markers.as_slice()).unwrap_or(&[]);
        let has = |name: &str| markers.iter().any(|marker| marker.is(name));

        Self {
            getter: accessor(pair.getter, || format!("get{}", capitalized_name)),
            setter: accessor(pair.setter, || format!("set{}", capitalized_name)),
            name: pair.property.clone(),
            capitalized_name,
            property_type,
            id: has(names::ID),
            generated: has(names::GENERATED_VALUE),
            version: has(names::VERSION),
            role: PropertyRole::classify(markers),
            validations: markers.iter().filter(|m| m.constraint).cloned().collect(),
        }
    }

    /// Generated or version properties are maintained by the persistence runtime.
    pub fn is_managed(&self) -> bool {
        self.generated || self.version
    }

    pub fn is_relation(&self) -> bool {
        matches!(self.role, PropertyRole::Relation(_))
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self.role, PropertyRole::Embedded)
    }

    pub fn is_nullable(&self) -> bool {
        self.role.attrs().is_some_and(|attrs| attrs.nullable)
    }

    pub fn is_insertable(&self) -> bool {
        self.role.attrs().is_some_and(|attrs| attrs.insertable)
    }

    pub fn is_updatable(&self) -> bool {
        self.role.attrs().is_some_and(|attrs| attrs.updatable)
    }
}

fn accessor(method: Option<&MethodModel>, synthesize: impl FnOnce() -> String) -> Accessor {
    match method {
        Some(method) => Accessor {
            name: method.name.clone(),
            present: true,
        },
        None => Accessor {
            name: synthesize(),
            present: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MarkerValue, PrimitiveKind, pair_accessors};

    fn void() -> TypeModel {
        TypeModel::Primitive(PrimitiveKind::Void)
    }

    fn build(methods: &[MethodModel]) -> Vec<PropertyModel> {
        pair_accessors(methods)
            .iter()
            .map(PropertyModel::from_pair)
            .collect()
    }

    #[test]
    fn test_column_property_defaults() {
        let methods = vec![
            MethodModel::new("getName", TypeModel::String).with_marker(Marker::new(names::COLUMN)),
            MethodModel::new("setName", void()).with_param(TypeModel::String),
        ];

        let props = build(&methods);

        assert_eq!(props.len(), 1);
        let name = &props[0];
        assert_eq!(name.name, "name");
        assert_eq!(name.capitalized_name, "Name");
        assert_eq!(name.property_type, TypeModel::String);
        assert!(matches!(name.role, PropertyRole::Column(_)));
        assert!(name.is_nullable());
        assert!(name.is_insertable());
        assert!(name.is_updatable());
        assert!(!name.is_managed());
    }

    #[test]
    fn test_column_attrs_from_marker() {
        let column = Marker::new(names::COLUMN)
            .with_value("nullable", MarkerValue::Bool(false))
            .with_value("updatable", MarkerValue::Bool(false));
        let methods = vec![MethodModel::new("getCode", TypeModel::String).with_marker(column)];

        let props = build(&methods);

        assert!(!props[0].is_nullable());
        assert!(props[0].is_insertable());
        assert!(!props[0].is_updatable());
    }

    #[test]
    fn test_identity_and_managed_flags() {
        let methods = vec![
            MethodModel::new("getId", TypeModel::Primitive(PrimitiveKind::Long))
                .with_marker(Marker::new(names::ID))
                .with_marker(Marker::new(names::GENERATED_VALUE))
                .with_marker(Marker::new(names::COLUMN)),
            MethodModel::new("getRevision", TypeModel::Primitive(PrimitiveKind::Int))
                .with_marker(Marker::new(names::VERSION))
                .with_marker(Marker::new(names::COLUMN)),
        ];

        let props = build(&methods);

        assert!(props[0].id);
        assert!(props[0].generated);
        assert!(props[0].is_managed());
        assert!(props[1].version);
        assert!(props[1].is_managed());
    }

    #[test]
    fn test_role_priority() {
        let both = vec![
            Marker::new(names::EMBEDDED),
            Marker::new(names::JOIN_COLUMN),
            Marker::new(names::COLUMN),
        ];
        assert!(matches!(PropertyRole::classify(&both), PropertyRole::Column(_)));

        let relation = vec![Marker::new(names::EMBEDDED), Marker::new(names::JOIN_COLUMN)];
        assert!(matches!(
            PropertyRole::classify(&relation),
            PropertyRole::Relation(_)
        ));

        assert_eq!(
            PropertyRole::classify(&[Marker::new(names::EMBEDDED)]),
            PropertyRole::Embedded
        );
        assert_eq!(PropertyRole::classify(&[]), PropertyRole::Unclassified);
    }

    #[test]
    fn test_non_column_roles_are_not_writable() {
        let methods = vec![
            MethodModel::new("getAddress", TypeModel::Class("com.example.Address".into()))
                .with_marker(Marker::new(names::EMBEDDED)),
            MethodModel::new("getNickname", TypeModel::String),
        ];

        let props = build(&methods);

        for prop in &props {
            assert!(!prop.is_nullable());
            assert!(!prop.is_insertable());
            assert!(!prop.is_updatable());
        }
        assert!(props[0].is_embedded());
        assert_eq!(props[1].role, PropertyRole::Unclassified);
    }

    #[test]
    fn test_synthesized_accessor_names() {
        let methods = vec![
            MethodModel::new("getCreatedAt", TypeModel::Class("java.time.Instant".into())),
            MethodModel::new("setSecret", void()).with_param(TypeModel::String),
        ];

        let props = build(&methods);

        assert!(props[0].getter.present);
        assert_eq!(props[0].setter.name, "setCreatedAt");
        assert!(!props[0].setter.present);

        assert_eq!(props[1].getter.name, "getSecret");
        assert!(!props[1].getter.present);
        assert_eq!(props[1].property_type, TypeModel::String);
    }

    #[test]
    fn test_validations_keep_only_constraints() {
        let not_null = Marker::new("jakarta.validation.constraints.NotNull").with_constraint(true);
        let methods = vec![
            MethodModel::new("getName", TypeModel::String)
                .with_marker(Marker::new(names::COLUMN))
                .with_marker(not_null.clone()),
        ];

        let props = build(&methods);

        assert_eq!(props[0].validations, vec![not_null]);
    }
}
