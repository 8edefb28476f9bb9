//! Persistence metamodel for the crudgen generator.
//!
//! This crate holds the neutral description of annotated persistent classes
//! that the emitters work from.
//!
//! # Architecture
//!
//! ```text
//! crudgen.toml → crudgen-manifest (parsing) → crudgen-ir (metamodel) → codegen
//! ```
//!
//! Everything here is plain data plus pure functions:
//! - [`TypeModel`] classifies written types and converts between primitive
//!   and boxed forms
//! - [`pair_accessors`] matches getters and setters by property name
//! - [`ClassModel`] and [`PropertyModel`] carry roles and derived names
//! - [`Metamodel`] caches class models by qualified name for one pass

mod class;
pub mod marker;
mod metamodel;
mod method;
mod property;
mod types;

pub use class::{ClassModel, CodegenOverrides, NestingKind, Visibility};
pub use marker::{Marker, MarkerValue, is_builtin_constraint};
pub use metamodel::Metamodel;
pub use method::{AccessorPair, MethodModel, pair_accessors};
pub use property::{Accessor, ColumnAttrs, PropertyModel, PropertyRole};
pub use types::{PrimitiveKind, TypeModel};
