//! Methods and accessor pairing.

use crudgen_core::decapitalize;
use serde::Serialize;

use crate::{Marker, TypeModel, marker::find_marker};

/// A method as supplied by the class descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodModel {
    pub name: String,
    pub is_static: bool,
    pub return_type: TypeModel,
    pub param_types: Vec<TypeModel>,
    pub markers: Vec<Marker>,
}

impl MethodModel {
    pub fn new(name: impl Into<String>, return_type: TypeModel) -> Self {
        Self {
            name: name.into(),
            is_static: false,
            return_type,
            param_types: Vec::new(),
            markers: Vec::new(),
        }
    }

    pub fn with_param(mut self, ty: TypeModel) -> Self {
        self.param_types.push(ty);
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn marker(&self, name: &str) -> Option<&Marker> {
        find_marker(&self.markers, name)
    }

    pub fn has_marker(&self, name: &str) -> bool {
        self.marker(name).is_some()
    }

    /// Same name and parameter list, i.e. one overrides the other.
    pub fn same_signature(&self, other: &MethodModel) -> bool {
        self.name == other.name && self.param_types == other.param_types
    }

    /// The property this method reads, if it is a getter.
    pub fn getter_property(&self) -> Option<String> {
        if self.is_static {
            return None;
        }
        accessor_suffix(&self.name, "get")
            .or_else(|| accessor_suffix(&self.name, "is"))
            .map(decapitalize)
    }

    /// The property this method writes, if it is a setter.
    pub fn setter_property(&self) -> Option<String> {
        if self.is_static {
            return None;
        }
        accessor_suffix(&self.name, "set").map(decapitalize)
    }
}

fn accessor_suffix<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    name.strip_prefix(prefix).filter(|rest| !rest.is_empty())
}

/// A getter and setter matched by property name.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessorPair<'a> {
    pub property: String,
    pub getter: Option<&'a MethodModel>,
    pub setter: Option<&'a MethodModel>,
}

/// Pair getters (`getFoo`/`isFoo`) with setters (`setFoo`) by decapitalized
/// property name.
///
/// Pairs are ordered by the first appearance of either accessor. When a
/// property has several getters (or setters), the first one wins.
pub fn pair_accessors(methods: &[MethodModel]) -> Vec<AccessorPair<'_>> {
    let mut pairs: Vec<AccessorPair<'_>> = Vec::new();

    for method in methods {
        let (property, is_getter) = match (method.getter_property(), method.setter_property()) {
            (Some(property), _) => (property, true),
            (None, Some(property)) => (property, false),
            (None, None) => continue,
        };

        let index = match pairs.iter().position(|pair| pair.property == property) {
            Some(index) => index,
            None => {
                pairs.push(AccessorPair {
                    property,
                    getter: None,
                    setter: None,
                });
                pairs.len() - 1
            }
        };

        let pair = &mut pairs[index];
        let slot = if is_getter {
            &mut pair.getter
        } else {
            &mut pair.setter
        };
        if slot.is_none() {
            *slot = Some(method);
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrimitiveKind;

    fn getter(name: &str) -> MethodModel {
        MethodModel::new(name, TypeModel::String)
    }

    fn setter(name: &str) -> MethodModel {
        MethodModel::new(name, TypeModel::Primitive(PrimitiveKind::Void)).with_param(TypeModel::String)
    }

    #[test]
    fn test_getter_and_setter_names() {
        assert_eq!(getter("getName").getter_property().as_deref(), Some("name"));
        assert_eq!(getter("isActive").getter_property().as_deref(), Some("active"));
        assert_eq!(getter("getURL").getter_property().as_deref(), Some("URL"));
        assert_eq!(setter("setName").setter_property().as_deref(), Some("name"));

        assert_eq!(getter("get").getter_property(), None);
        assert_eq!(getter("is").getter_property(), None);
        assert_eq!(setter("set").setter_property(), None);
        assert_eq!(getter("toString").getter_property(), None);
    }

    #[test]
    fn test_static_methods_are_not_accessors() {
        let method = getter("getInstance").with_static(true);
        assert_eq!(method.getter_property(), None);
    }

    #[test]
    fn test_pair_accessors() {
        let methods = vec![
            getter("getName"),
            setter("setName"),
            getter("getId"),
            setter("setId"),
        ];

        let pairs = pair_accessors(&methods);

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].property, "name");
        assert_eq!(pairs[0].getter.map(|m| m.name.as_str()), Some("getName"));
        assert_eq!(pairs[0].setter.map(|m| m.name.as_str()), Some("setName"));
        assert_eq!(pairs[1].property, "id");
    }

    #[test]
    fn test_pair_accessors_orders_by_first_discovery() {
        let methods = vec![setter("setB"), getter("getA"), getter("getB")];

        let pairs = pair_accessors(&methods);

        let names: Vec<&str> = pairs.iter().map(|pair| pair.property.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert!(pairs[0].getter.is_some());
        assert!(pairs[0].setter.is_some());
    }

    #[test]
    fn test_pair_accessors_keeps_one_sided_properties() {
        let methods = vec![getter("getCreatedAt"), setter("setPassword")];

        let pairs = pair_accessors(&methods);

        assert_eq!(pairs.len(), 2);
        assert!(pairs[0].setter.is_none());
        assert!(pairs[1].getter.is_none());
    }

    #[test]
    fn test_pair_accessors_first_getter_wins() {
        let methods = vec![getter("getActive"), getter("isActive")];

        let pairs = pair_accessors(&methods);

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].getter.map(|m| m.name.as_str()), Some("getActive"));
    }

    #[test]
    fn test_pair_accessors_skips_static_and_plain_methods() {
        let methods = vec![
            getter("getInstance").with_static(true),
            getter("hashCode"),
            getter("getName"),
        ];

        let pairs = pair_accessors(&methods);

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].property, "name");
    }
}
