//! The `<Name>CRUD` interface.
//!
//! Implementors supply `getEntityManager()` and inherit every operation as a
//! default method. Blocks are appended in a fixed order: count, list, find,
//! create, update, delete, then the two query contexts.

use std::path::{Path, PathBuf};

use crudgen_codegen::builder::CodeFragment;
use crudgen_core::GeneratedFile;
use crudgen_ir::{ClassModel, PropertyModel};

use super::{ENTITY_NOT_FOUND, count_context, if_else, list_context, source_path};
use crate::{
    JavaFile,
    ast::{Method, Param, TypeDecl},
};

const ENTITY_MANAGER: &str = "jakarta.persistence.EntityManager";
const LOCK_MODE: &str = "jakarta.persistence.LockModeType";
const PREDICATE: &str = "jakarta.persistence.criteria.Predicate";
const ORDER: &str = "jakarta.persistence.criteria.Order";

/// What a lookup does when no row matches the id.
#[derive(Clone, Copy)]
enum OnMissing {
    Throw,
    ReturnNull,
}

impl OnMissing {
    fn suffix(&self) -> &'static str {
        match self {
            OnMissing::Throw => "",
            OnMissing::ReturnNull => "OrNull",
        }
    }

    fn guard(&self) -> CodeFragment {
        let statement = match self {
            OnMissing::Throw => ENTITY_NOT_FOUND,
            OnMissing::ReturnNull => "return null;",
        };
        CodeFragment::braced("if (entity == null) {", vec![CodeFragment::line(statement)])
    }
}

/// The CRUD interface of one entity.
pub struct CrudInterface<'a> {
    class: &'a ClassModel,
}

impl<'a> CrudInterface<'a> {
    pub fn new(class: &'a ClassModel) -> Self {
        Self { class }
    }

    fn entity(&self) -> &str {
        &self.class.qualified_name
    }

    fn op(&self, verb: &str, missing: Option<OnMissing>) -> String {
        let suffix = missing.map(|m| m.suffix()).unwrap_or("");
        format!("{}{}{}", verb, self.class.capitalized_name, suffix)
    }

    /// Allocate the result, copy the entity out, return it.
    fn copy_out(&self) -> Vec<CodeFragment> {
        let dto = self.class.qualified_dto_name();
        vec![
            CodeFragment::line(format!("{0} result = new {0}();", dto)),
            CodeFragment::line(format!(
                "{}.copyAllProperties(result, entity);",
                self.class.qualified_dti_name()
            )),
            CodeFragment::line("return result;"),
        ]
    }

    fn criteria_query(&self, result_type: &str) -> Vec<CodeFragment> {
        let entity = self.entity();
        vec![
            CodeFragment::line(
                "jakarta.persistence.criteria.CriteriaBuilder criteriaBuilder = this.getEntityManager().getCriteriaBuilder();",
            ),
            CodeFragment::line(format!(
                "jakarta.persistence.criteria.CriteriaQuery<{0}> criteriaQuery = criteriaBuilder.createQuery({0}.class);",
                result_type
            )),
            CodeFragment::line(format!(
                "jakarta.persistence.criteria.Root<{0}> root = criteriaQuery.from({0}.class);",
                entity
            )),
        ]
    }

    fn where_predicates() -> CodeFragment {
        CodeFragment::braced(
            "if (!context.getPredicates().isEmpty()) {",
            vec![CodeFragment::line(format!(
                "criteriaQuery.where(context.getPredicates().toArray(new {}[0]));",
                PREDICATE
            ))],
        )
    }

    fn count(&self) -> Method {
        Method::new(self.op("count", None))
            .default_method()
            .returns("java.lang.Long")
            .param(Param::new(
                "consumer",
                "java.util.function.Consumer<CountContext>",
            ))
            .body_fragments(self.criteria_query("java.lang.Long"))
            .body_line("CountContext context = new CountContext(criteriaBuilder, root);")
            .body_line("consumer.accept(context);")
            .body_fragment(if_else(
                "if (context.isDistinct()) {",
                vec![CodeFragment::line(
                    "criteriaQuery.select(criteriaBuilder.countDistinct(root));",
                )],
                vec![CodeFragment::line(
                    "criteriaQuery.select(criteriaBuilder.count(root));",
                )],
            ))
            .body_fragment(Self::where_predicates())
            .body_line(
                "jakarta.persistence.TypedQuery<java.lang.Long> typedQuery = this.getEntityManager().createQuery(criteriaQuery);",
            )
            .body_line("return typedQuery.getSingleResult();")
    }

    fn list(&self) -> Method {
        let entity = self.entity();
        let dto = self.class.qualified_dto_name();
        Method::new(self.op("list", None))
            .default_method()
            .returns(format!("java.util.List<{}>", dto))
            .param(Param::new(
                "consumer",
                "java.util.function.Consumer<ListContext>",
            ))
            .body_fragments(self.criteria_query(entity))
            .body_line("ListContext context = new ListContext(criteriaBuilder, root);")
            .body_line("consumer.accept(context);")
            .body_line("criteriaQuery.select(root);")
            .body_line("criteriaQuery.distinct(context.isDistinct());")
            .body_fragment(Self::where_predicates())
            .body_fragment(CodeFragment::braced(
                "if (!context.getOrders().isEmpty()) {",
                vec![CodeFragment::line(format!(
                    "criteriaQuery.orderBy(context.getOrders().toArray(new {}[0]));",
                    ORDER
                ))],
            ))
            .body_line(format!(
                "jakarta.persistence.TypedQuery<{}> typedQuery = this.getEntityManager().createQuery(criteriaQuery);",
                entity
            ))
            .body_fragment(CodeFragment::braced(
                "if (context.getFirstResult() >= 0) {",
                vec![CodeFragment::line(
                    "typedQuery.setFirstResult(context.getFirstResult());",
                )],
            ))
            .body_fragment(CodeFragment::braced(
                "if (context.getMaxResults() >= 0) {",
                vec![CodeFragment::line(
                    "typedQuery.setMaxResults(context.getMaxResults());",
                )],
            ))
            .body_fragment(CodeFragment::braced(
                "if (context.getLockMode() != null) {",
                vec![CodeFragment::line(
                    "typedQuery.setLockMode(context.getLockMode());",
                )],
            ))
            .body_fragment(CodeFragment::block(
                "return typedQuery.getResultList().stream().map(entity -> {",
                self.copy_out(),
                Some("}).collect(java.util.stream.Collectors.toList());".to_string()),
            ))
    }

    /// `find<Name>(id)` delegating to the lock-aware overload with no lock.
    fn find(&self, id: &PropertyModel, missing: OnMissing) -> Method {
        let name = self.op("find", Some(missing));
        Method::new(&name)
            .default_method()
            .returns(self.class.qualified_dto_name())
            .param(id_param(id))
            .body_line(format!(
                "return this.{}(id, {}.NONE);",
                name, LOCK_MODE
            ))
    }

    fn find_locked(&self, id: &PropertyModel, missing: OnMissing) -> Method {
        Method::new(self.op("find", Some(missing)))
            .default_method()
            .returns(self.class.qualified_dto_name())
            .param(id_param(id))
            .param(Param::new("lockMode", LOCK_MODE))
            .body_line(format!(
                "{0} entity = this.getEntityManager().find({0}.class, id, lockMode);",
                self.entity()
            ))
            .body_fragment(missing.guard())
            .body_fragments(self.copy_out())
    }

    fn create(&self) -> Method {
        Method::new(self.op("create", None))
            .default_method()
            .returns(self.class.qualified_dto_name())
            .param(Param::new("data", self.class.qualified_dti_name()))
            .body_line(format!("{0} entity = new {0}();", self.entity()))
            .body_line(format!(
                "{}.copyInsertProperties(this.getEntityManager(), entity, data);",
                self.class.qualified_dti_name()
            ))
            .body_line("this.getEntityManager().persist(entity);")
            .body_line("this.getEntityManager().flush();")
            .body_fragments(self.copy_out())
    }

    fn update(&self, id: &PropertyModel, missing: OnMissing) -> Method {
        Method::new(self.op("update", Some(missing)))
            .default_method()
            .returns(self.class.qualified_dto_name())
            .param(id_param(id))
            .param(Param::new("data", self.class.qualified_dti_name()))
            .body_line(self.lookup())
            .body_fragment(missing.guard())
            .body_line(format!(
                "{}.copyUpdateProperties(this.getEntityManager(), entity, data);",
                self.class.qualified_dti_name()
            ))
            .body_line("this.getEntityManager().flush();")
            .body_fragments(self.copy_out())
    }

    /// The snapshot is taken before the row is removed.
    fn delete(&self, id: &PropertyModel, missing: OnMissing) -> Method {
        let dto = self.class.qualified_dto_name();
        Method::new(self.op("delete", Some(missing)))
            .default_method()
            .returns(&dto)
            .param(id_param(id))
            .body_line(self.lookup())
            .body_fragment(missing.guard())
            .body_line(format!("{0} result = new {0}();", dto))
            .body_line(format!(
                "{}.copyAllProperties(result, entity);",
                self.class.qualified_dti_name()
            ))
            .body_line("this.getEntityManager().remove(entity);")
            .body_line("this.getEntityManager().flush();")
            .body_line("return result;")
    }

    fn lookup(&self) -> String {
        format!(
            "{0} entity = this.getEntityManager().find({0}.class, id);",
            self.entity()
        )
    }

    fn declaration(&self) -> TypeDecl {
        let mut decl = TypeDecl::interface(self.class.crud_name())
            .public()
            .member(Method::new("getEntityManager").returns(ENTITY_MANAGER))
            .member(self.count())
            .member(self.list());

        let id = self.class.id_property();
        if let Some(id) = id {
            for missing in [OnMissing::Throw, OnMissing::ReturnNull] {
                decl = decl
                    .member(self.find(id, missing))
                    .member(self.find_locked(id, missing));
            }
        }

        decl = decl.member(self.create());

        if let Some(id) = id {
            for missing in [OnMissing::Throw, OnMissing::ReturnNull] {
                decl = decl.member(self.update(id, missing));
            }
            for missing in [OnMissing::Throw, OnMissing::ReturnNull] {
                decl = decl.member(self.delete(id, missing));
            }
        }

        decl.member(count_context(self.entity()))
            .member(list_context(self.entity()))
    }
}

fn id_param(id: &PropertyModel) -> Param {
    Param::new("id", id.property_type.to_non_nullable().to_code())
}

impl GeneratedFile for CrudInterface<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        source_path(base, &self.class.package, &self.class.crud_name())
    }

    fn render(&self) -> String {
        JavaFile::new(&self.class.qualified_name)
            .package(&self.class.package)
            .add(self.declaration())
            .render()
    }
}
