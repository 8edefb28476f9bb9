//! Transfer-side view of a class's properties.
//!
//! Relation and embedded properties only take part in transfer types once
//! their referenced class is known; [`transfer_properties`] resolves them
//! against the metamodel and leaves out the ones that cannot be emitted.

use crudgen_ir::{ClassModel, Metamodel, PropertyModel, PropertyRole, TypeModel};

/// How a property is carried by the transfer types.
#[derive(Debug, Clone, Copy)]
pub enum Transfer<'a> {
    /// A scalar column, carried as-is.
    Column,
    /// A to-one relation, carried as the target's identity.
    Relation {
        target: &'a ClassModel,
        id: &'a PropertyModel,
    },
    /// An embedded value, carried as the embedded class's transfer interface.
    Embedded { target: &'a ClassModel },
    /// No role marker: a plain field of the transfer class only.
    Unclassified,
}

/// A property resolved for the transfer types.
#[derive(Debug, Clone, Copy)]
pub struct TransferProperty<'a> {
    /// Position of the property in its class.
    pub index: usize,
    pub property: &'a PropertyModel,
    pub transfer: Transfer<'a>,
}

impl TransferProperty<'_> {
    /// Whether the transfer interface declares accessors for this property.
    pub fn is_declared(&self) -> bool {
        !matches!(self.transfer, Transfer::Unclassified)
    }

    /// Name on the transfer side (`owner` becomes `ownerId`).
    pub fn name(&self) -> String {
        match self.transfer {
            Transfer::Relation { .. } => format!("{}Id", self.property.name),
            _ => self.property.name.clone(),
        }
    }

    pub fn getter(&self) -> String {
        match self.transfer {
            Transfer::Relation { .. } => format!("{}Id", self.property.getter.name),
            _ => self.property.getter.name.clone(),
        }
    }

    pub fn setter(&self) -> String {
        match self.transfer {
            Transfer::Relation { .. } => format!("{}Id", self.property.setter.name),
            _ => self.property.setter.name.clone(),
        }
    }

    /// Java type on the transfer side.
    ///
    /// Relation ids are always nullable so an absent relation can be
    /// expressed.
    pub fn java_type(&self) -> String {
        match self.transfer {
            Transfer::Column | Transfer::Unclassified => self.property.property_type.to_code(),
            Transfer::Relation { id, .. } => id.property_type.to_nullable().to_code(),
            Transfer::Embedded { target } => target.qualified_dti_name(),
        }
    }

    /// The identity type used when resolving a relation on copy-in.
    ///
    /// Only a non-nullable relation to a primitive identity looks ids up
    /// through the primitive type. Boxed identities stay boxed whatever the
    /// relation's nullability.
    pub fn relation_lookup_type(&self) -> Option<TypeModel> {
        match self.transfer {
            Transfer::Relation { id, .. }
                if id.property_type.is_primitive() && !self.property.is_nullable() =>
            {
                Some(id.property_type.clone())
            }
            Transfer::Relation { id, .. } => Some(id.property_type.to_nullable()),
            _ => None,
        }
    }
}

/// Resolve every emittable property of `class`, in declaration order.
///
/// Relations whose target is undeclared or has no identity, or whose
/// transfer name is already a property, are left out. So are embedded
/// values whose class has no generated transfer types.
pub fn transfer_properties<'a>(
    metamodel: &'a Metamodel,
    class: &'a ClassModel,
) -> Vec<TransferProperty<'a>> {
    class
        .properties
        .iter()
        .enumerate()
        .filter_map(|(index, property)| {
            let transfer = match property.role {
                PropertyRole::Column(_) => Transfer::Column,
                PropertyRole::Relation(_) => {
                    if class.relation_id_taken(property) {
                        return None;
                    }
                    let target = metamodel.relation_target(class, property)?;
                    let id = target.id_property()?;
                    Transfer::Relation { target, id }
                }
                PropertyRole::Embedded => {
                    let target = metamodel
                        .embedded_target(class, property)
                        .filter(|t| t.is_codegen() && t.is_transfer_eligible())?;
                    Transfer::Embedded { target }
                }
                PropertyRole::Unclassified => Transfer::Unclassified,
            };
            Some(TransferProperty {
                index,
                property,
                transfer,
            })
        })
        .collect()
}
