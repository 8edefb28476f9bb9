//! Java declaration builders for generating types, fields and methods.
//!
//! These provide a high-level API for constructing Java syntax,
//! which can then be rendered via CodeBuilder.

mod fields;
mod methods;
mod types;

pub use fields::Field;
pub use methods::{Method, Param};
pub use types::{TypeDecl, TypeKind};
