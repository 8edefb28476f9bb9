//! The `CountContext` and `ListContext` classes nested in a CRUD interface.
//!
//! A context is the mutable collector a caller's configurator fills before
//! the query runs: predicates, the duplicate-suppression flag and, for
//! lists, sort terms, paging bounds and a lock hint.

use crate::ast::{Field, Method, Param, TypeDecl};

const CRITERIA_BUILDER: &str = "jakarta.persistence.criteria.CriteriaBuilder";
const PREDICATE: &str = "jakarta.persistence.criteria.Predicate";
const ORDER: &str = "jakarta.persistence.criteria.Order";
const LOCK_MODE: &str = "jakarta.persistence.LockModeType";

/// How a context slot gets its value.
enum Slot {
    /// Passed to the constructor, read-only.
    Bound,
    /// A list the caller appends to, read-only reference.
    Collected,
    /// A caller-settable value with its unset default.
    Settable(&'static str),
}

struct ContextSlot {
    name: &'static str,
    ty: String,
    slot: Slot,
}

impl ContextSlot {
    fn new(name: &'static str, ty: impl Into<String>, slot: Slot) -> Self {
        Self {
            name,
            ty: ty.into(),
            slot,
        }
    }

    fn capitalized(&self) -> String {
        crudgen_core::capitalize(self.name)
    }

    fn field(&self) -> Field {
        let field = Field::new(self.name, &self.ty);
        match self.slot {
            Slot::Bound => field.final_(),
            Slot::Collected => field.final_().init("new java.util.ArrayList<>()"),
            Slot::Settable(default) => field.init(default),
        }
    }

    fn getter(&self) -> Method {
        let prefix = if self.ty == "boolean" { "is" } else { "get" };
        Method::new(format!("{}{}", prefix, self.capitalized()))
            .public()
            .returns(&self.ty)
            .body_line(format!("return this.{};", self.name))
    }

    fn setter(&self) -> Option<Method> {
        match self.slot {
            Slot::Settable(_) => Some(
                Method::new(format!("set{}", self.capitalized()))
                    .public()
                    .param(Param::new(self.name, &self.ty))
                    .body_line(format!("this.{0} = {0};", self.name)),
            ),
            _ => None,
        }
    }
}

fn root_type(entity: &str) -> String {
    format!("jakarta.persistence.criteria.Root<{}>", entity)
}

/// Render a `final class` from its slots: fields, a package-private
/// constructor taking the bound slots, then accessors in slot order.
fn context_class(name: &str, slots: &[ContextSlot]) -> TypeDecl {
    let constructor = slots
        .iter()
        .filter(|s| matches!(s.slot, Slot::Bound))
        .fold(Method::constructor(name), |method, slot| {
            method
                .param(Param::new(slot.name, &slot.ty))
                .body_line(format!("this.{0} = {0};", slot.name))
        });

    let mut decl = TypeDecl::class(name)
        .modifier("final")
        .fields(slots.iter().map(ContextSlot::field))
        .member(constructor);
    for slot in slots {
        decl = decl.member(slot.getter());
        if let Some(setter) = slot.setter() {
            decl = decl.member(setter);
        }
    }
    decl
}

/// The context passed to `count<Name>` configurators.
pub fn count_context(entity: &str) -> TypeDecl {
    context_class(
        "CountContext",
        &[
            ContextSlot::new("criteriaBuilder", CRITERIA_BUILDER, Slot::Bound),
            ContextSlot::new("root", root_type(entity), Slot::Bound),
            ContextSlot::new(
                "predicates",
                format!("java.util.List<{}>", PREDICATE),
                Slot::Collected,
            ),
            ContextSlot::new("distinct", "boolean", Slot::Settable("false")),
        ],
    )
}

/// The context passed to `list<Name>` configurators.
///
/// `firstResult` and `maxResults` start at `-1`, meaning unset.
pub fn list_context(entity: &str) -> TypeDecl {
    context_class(
        "ListContext",
        &[
            ContextSlot::new("criteriaBuilder", CRITERIA_BUILDER, Slot::Bound),
            ContextSlot::new("firstResult", "int", Slot::Settable("-1")),
            ContextSlot::new("maxResults", "int", Slot::Settable("-1")),
            ContextSlot::new("lockMode", LOCK_MODE, Slot::Settable("null")),
            ContextSlot::new("root", root_type(entity), Slot::Bound),
            ContextSlot::new(
                "predicates",
                format!("java.util.List<{}>", PREDICATE),
                Slot::Collected,
            ),
            ContextSlot::new(
                "orders",
                format!("java.util.List<{}>", ORDER),
                Slot::Collected,
            ),
            ContextSlot::new("distinct", "boolean", Slot::Settable("false")),
        ],
    )
}
