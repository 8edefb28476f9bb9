//! Class models for one generation pass, keyed by qualified name.

use crudgen_core::qualify;
use indexmap::IndexMap;
use serde::Serialize;

use crate::{ClassModel, PropertyModel, TypeModel};

/// The class-model cache for one generation pass.
///
/// Iteration follows insertion order, which is declaration order in the
/// manifest.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Metamodel {
    pub classes: IndexMap<String, ClassModel>,
}

impl Metamodel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class, replacing any earlier model with the same qualified name.
    pub fn insert(&mut self, class: ClassModel) {
        self.classes.insert(class.qualified_name.clone(), class);
    }

    pub fn get(&self, qualified_name: &str) -> Option<&ClassModel> {
        self.classes.get(qualified_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassModel> {
        self.classes.values()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Resolve a class reference seen from `package`.
    ///
    /// Qualified names are looked up as written; simple names are also tried
    /// against the referring package.
    pub fn resolve(&self, ty: &TypeModel, package: &str) -> Option<&ClassModel> {
        let name = ty.class_name()?;
        if let Some(class) = self.get(name) {
            return Some(class);
        }
        if name.contains('.') {
            return None;
        }
        self.get(&qualify(package, name))
    }

    /// The target entity of a relation property owned by `owner`.
    pub fn relation_target(&self, owner: &ClassModel, property: &PropertyModel) -> Option<&ClassModel> {
        if !property.is_relation() {
            return None;
        }
        self.resolve(&property.property_type, &owner.package)
    }

    /// The embedded class of an embedded property owned by `owner`.
    pub fn embedded_target(&self, owner: &ClassModel, property: &PropertyModel) -> Option<&ClassModel> {
        if !property.is_embedded() {
            return None;
        }
        self.resolve(&property.property_type, &owner.package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Marker, MethodModel, marker::names};

    fn sample() -> Metamodel {
        let customer_methods = vec![
            MethodModel::new("getId", TypeModel::normalize("long"))
                .with_marker(Marker::new(names::ID)),
        ];
        let order_methods = vec![
            MethodModel::new("getCustomer", TypeModel::normalize("Customer"))
                .with_marker(Marker::new(names::JOIN_COLUMN)),
            MethodModel::new("getAddress", TypeModel::normalize("com.example.Address"))
                .with_marker(Marker::new(names::EMBEDDED)),
            MethodModel::new("getNote", TypeModel::normalize("com.example.Note"))
                .with_marker(Marker::new(names::JOIN_COLUMN)),
        ];

        let mut metamodel = Metamodel::new();
        metamodel.insert(ClassModel::new(
            "com.example",
            "Customer",
            &[Marker::new(names::ENTITY)],
            &customer_methods,
        ));
        metamodel.insert(ClassModel::new(
            "com.example",
            "Address",
            &[Marker::new(names::EMBEDDABLE)],
            &[],
        ));
        metamodel.insert(ClassModel::new(
            "com.example",
            "Order",
            &[Marker::new(names::ENTITY)],
            &order_methods,
        ));
        metamodel
    }

    #[test]
    fn test_preserves_declaration_order() {
        let metamodel = sample();
        let names: Vec<&str> = metamodel.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Customer", "Address", "Order"]);
        assert_eq!(metamodel.len(), 3);
    }

    #[test]
    fn test_resolve_qualified_and_simple_names() {
        let metamodel = sample();

        let qualified = TypeModel::Class("com.example.Customer".into());
        let simple = TypeModel::Class("Customer".into());

        assert!(metamodel.resolve(&qualified, "org.other").is_some());
        assert!(metamodel.resolve(&simple, "com.example").is_some());
        assert!(metamodel.resolve(&simple, "org.other").is_none());
        assert!(metamodel.resolve(&TypeModel::String, "com.example").is_none());
    }

    #[test]
    fn test_relation_and_embedded_targets() {
        let metamodel = sample();
        let order = metamodel.get("com.example.Order").unwrap();

        let customer = order.property("customer").unwrap();
        let address = order.property("address").unwrap();
        let note = order.property("note").unwrap();

        assert_eq!(
            metamodel.relation_target(order, customer).map(|c| c.name.as_str()),
            Some("Customer")
        );
        assert!(metamodel.embedded_target(order, customer).is_none());
        assert_eq!(
            metamodel.embedded_target(order, address).map(|c| c.name.as_str()),
            Some("Address")
        );
        assert!(metamodel.relation_target(order, note).is_none());
    }

    #[test]
    fn test_insert_replaces_same_name() {
        let mut metamodel = sample();
        metamodel.insert(ClassModel::new("com.example", "Customer", &[], &[]));

        assert_eq!(metamodel.len(), 3);
        assert!(!metamodel.get("com.example.Customer").unwrap().is_entity);
    }
}
