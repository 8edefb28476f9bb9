//! The `<Name>DTO` transfer class.

use std::path::{Path, PathBuf};

use crudgen_core::GeneratedFile;
use crudgen_ir::{ClassModel, Metamodel};

use super::source_path;
use crate::{
    JavaFile, TransferProperty,
    ast::{Field, Method, Param, TypeDecl},
    transfer_properties,
};

/// A plain serializable field container implementing the transfer interface.
///
/// Unclassified properties get a field and accessors too, without
/// `@java.lang.Override` since the interface does not declare them.
pub struct TransferClass<'a> {
    class: &'a ClassModel,
    properties: Vec<TransferProperty<'a>>,
}

impl<'a> TransferClass<'a> {
    pub fn new(metamodel: &'a Metamodel, class: &'a ClassModel) -> Self {
        Self {
            class,
            properties: transfer_properties(metamodel, class),
        }
    }

    fn accessors(property: &TransferProperty<'_>) -> [Method; 2] {
        let name = property.name();
        let ty = property.java_type();
        let getter = Method::new(property.getter())
            .public()
            .returns(&ty)
            .body_line(format!("return this.{};", name));
        let setter = Method::new(property.setter())
            .public()
            .param(Param::new(&name, &ty))
            .body_line(format!("this.{0} = {0};", name));

        if property.is_declared() {
            [
                getter.annotation("java.lang.Override"),
                setter.annotation("java.lang.Override"),
            ]
        } else {
            [getter, setter]
        }
    }

    fn declaration(&self) -> TypeDecl {
        let fields = self
            .properties
            .iter()
            .map(|p| Field::new(p.name(), p.java_type()));
        let accessors = self.properties.iter().flat_map(Self::accessors);

        TypeDecl::class(self.class.dto_name())
            .public()
            .implements(self.class.qualified_dti_name())
            .implements("java.io.Serializable")
            .fields(fields)
            .members(accessors.collect::<Vec<_>>())
    }
}

impl GeneratedFile for TransferClass<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        source_path(base, &self.class.package, &self.class.dto_name())
    }

    fn render(&self) -> String {
        JavaFile::new(&self.class.qualified_name)
            .package(&self.class.package)
            .add(self.declaration())
            .render()
    }
}
