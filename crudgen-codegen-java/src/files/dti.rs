//! The `<Name>DTI` transfer interface.
//!
//! Declares the transfer accessors, the static copy routines between the
//! entity and its transfer objects, and a nested `Wrapper` whose default
//! methods forward to a wrapped instance.

use std::path::{Path, PathBuf};

use crudgen_codegen::builder::CodeFragment;
use crudgen_core::GeneratedFile;
use crudgen_ir::{ClassModel, Metamodel};

use super::{RELATION_NOT_FOUND, if_else, source_path};
use crate::{
    JavaFile, Transfer, TransferProperty,
    ast::{Method, Param, TypeDecl},
    transfer_properties,
};

const ENTITY_MANAGER: &str = "jakarta.persistence.EntityManager";
const OVERRIDE: &str = "java.lang.Override";

/// Which copy-in routine is being rendered.
#[derive(Clone, Copy)]
enum CopyIn {
    Insert,
    Update,
}

impl CopyIn {
    fn routine(&self) -> &'static str {
        match self {
            CopyIn::Insert => "copyInsertProperties",
            CopyIn::Update => "copyUpdateProperties",
        }
    }

    /// Whether a column or relation property is written by this routine.
    fn writes(&self, property: &TransferProperty<'_>) -> bool {
        let p = property.property;
        let allowed = match self {
            CopyIn::Insert => p.is_insertable(),
            CopyIn::Update => p.is_updatable(),
        };
        allowed && !p.is_managed() && p.setter.present
    }
}

/// The transfer interface of one entity or embeddable.
pub struct TransferInterface<'a> {
    class: &'a ClassModel,
    properties: Vec<TransferProperty<'a>>,
}

impl<'a> TransferInterface<'a> {
    pub fn new(metamodel: &'a Metamodel, class: &'a ClassModel) -> Self {
        Self {
            class,
            properties: transfer_properties(metamodel, class),
        }
    }

    fn declared(&self) -> impl Iterator<Item = &TransferProperty<'a>> {
        self.properties.iter().filter(|p| p.is_declared())
    }

    fn accessors(&self, property: &TransferProperty<'_>) -> [Method; 2] {
        let getter = property
            .property
            .validations
            .iter()
            .fold(Method::new(property.getter()), |m, v| m.annotation_code(v.to_java()))
            .public()
            .returns(property.java_type());
        let setter = Method::new(property.setter())
            .public()
            .param(Param::new(property.name(), property.java_type()));
        [getter, setter]
    }

    /// Entity to transfer object. Properties without an entity getter are
    /// left alone.
    fn copy_all_from_entity(&self) -> Method {
        let fragments = self
            .declared()
            .filter(|p| p.property.getter.present)
            .map(|p| {
                let getter = &p.property.getter.name;
                match p.transfer {
                    Transfer::Relation { id, .. } => CodeFragment::braced(
                        format!("if (source.{}() != null) {{", getter),
                        vec![CodeFragment::line(format!(
                            "target.{}(source.{}().{}());",
                            p.setter(),
                            getter,
                            id.getter.name
                        ))],
                    ),
                    Transfer::Embedded { target } => {
                        copy_embedded(p, &target.qualified_dto_name(), target, "copyAllProperties(")
                    }
                    _ => CodeFragment::line(format!("target.{}(source.{}());", p.setter(), getter)),
                }
            });

        Method::new("copyAllProperties")
            .public()
            .static_()
            .param(Param::new("target", self.class.qualified_dti_name()))
            .param(Param::new("source", &self.class.qualified_name))
            .body_fragments(fragments.collect::<Vec<_>>())
    }

    /// Transfer object to transfer object.
    fn copy_all_from_transfer(&self) -> Method {
        let fragments = self.declared().map(|p| match p.transfer {
            Transfer::Embedded { target } => {
                copy_embedded(p, &target.qualified_dto_name(), target, "copyAllProperties(")
            }
            _ => CodeFragment::line(format!("target.{}(source.{}());", p.setter(), p.getter())),
        });

        Method::new("copyAllProperties")
            .public()
            .static_()
            .param(Param::new("target", self.class.qualified_dti_name()))
            .param(Param::new("source", self.class.qualified_dti_name()))
            .body_fragments(fragments.collect::<Vec<_>>())
    }

    fn copy_in(&self, mode: CopyIn) -> Method {
        let fragments = self.declared().filter_map(|p| match p.transfer {
            Transfer::Column if mode.writes(p) => Some(CodeFragment::line(format!(
                "target.{}(source.{}());",
                p.property.setter.name,
                p.getter()
            ))),
            Transfer::Relation { target, .. } if mode.writes(p) => Some(resolve_relation(p, target)),
            Transfer::Embedded { target }
                if p.property.getter.present && p.property.setter.present =>
            {
                let routine = format!("{}(entityManager, ", mode.routine());
                Some(copy_embedded(p, &target.qualified_name, target, &routine))
            }
            _ => None,
        });

        Method::new(mode.routine())
            .public()
            .static_()
            .param(Param::new("entityManager", ENTITY_MANAGER))
            .param(Param::new("target", &self.class.qualified_name))
            .param(Param::new("source", self.class.qualified_dti_name()))
            .body_fragments(fragments.collect::<Vec<_>>())
    }

    fn wrapper(&self) -> TypeDecl {
        let dti = self.class.qualified_dti_name();
        let mut wrapper = TypeDecl::interface("Wrapper")
            .extends(&dti)
            .member(Method::new("getWrapped").returns(&dti));

        for property in self.declared() {
            let ty = property.java_type();
            let name = property.name();
            wrapper = wrapper
                .member(
                    Method::new(property.getter())
                        .annotation(OVERRIDE)
                        .default_method()
                        .returns(&ty)
                        .body_line(format!("return this.getWrapped().{}();", property.getter())),
                )
                .member(
                    Method::new(property.setter())
                        .annotation(OVERRIDE)
                        .default_method()
                        .param(Param::new(&name, &ty))
                        .body_line(format!("this.getWrapped().{}({});", property.setter(), name)),
                );
        }
        wrapper
    }

    fn declaration(&self) -> TypeDecl {
        let accessors = self.declared().flat_map(|p| self.accessors(p));
        TypeDecl::interface(self.class.dti_name())
            .public()
            .members(accessors.collect::<Vec<_>>())
            .member(self.copy_all_from_entity())
            .member(self.copy_all_from_transfer())
            .member(self.copy_in(CopyIn::Insert))
            .member(self.copy_in(CopyIn::Update))
            .member(self.wrapper())
    }
}

/// Copy an embedded value, allocating `allocate` on the target side first.
///
/// `call` is the routine call prefix, e.g. `copyAllProperties(`.
fn copy_embedded(
    property: &TransferProperty<'_>,
    allocate: &str,
    target: &ClassModel,
    call: &str,
) -> CodeFragment {
    let getter = &property.property.getter.name;
    let setter = &property.property.setter.name;
    if_else(
        format!("if (source.{}() != null) {{", getter),
        vec![
            CodeFragment::line(format!("target.{}(new {}());", setter, allocate)),
            CodeFragment::line(format!(
                "{}.{}target.{}(), source.{}());",
                target.qualified_dti_name(),
                call,
                getter,
                getter
            )),
        ],
        vec![CodeFragment::line(format!("target.{}(null);", setter))],
    )
}

/// Resolve a relation id to a managed instance.
///
/// A primitive lookup type cannot be absent, so the lookup runs
/// unconditionally; otherwise an absent id clears the relation.
fn resolve_relation(property: &TransferProperty<'_>, target: &ClassModel) -> CodeFragment {
    let local = format!("relation{}", property.index);
    let setter = &property.property.setter.name;
    let lookup = vec![
        CodeFragment::line(format!(
            "{0} {1} = entityManager.find({0}.class, source.{2}());",
            target.qualified_name,
            local,
            property.getter()
        )),
        CodeFragment::braced(
            format!("if ({} == null) {{", local),
            vec![CodeFragment::line(RELATION_NOT_FOUND)],
        ),
        CodeFragment::line(format!("target.{}({});", setter, local)),
    ];

    let primitive = property
        .relation_lookup_type()
        .is_some_and(|ty| ty.is_primitive());
    if primitive {
        CodeFragment::sequence(lookup)
    } else {
        if_else(
            format!("if (source.{}() != null) {{", property.getter()),
            lookup,
            vec![CodeFragment::line(format!("target.{}(null);", setter))],
        )
    }
}

impl GeneratedFile for TransferInterface<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        source_path(base, &self.class.package, &self.class.dti_name())
    }

    fn render(&self) -> String {
        JavaFile::new(&self.class.qualified_name)
            .package(&self.class.package)
            .add(self.declaration())
            .render()
    }
}
