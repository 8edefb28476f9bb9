//! Java/Jakarta Persistence emitters for the crudgen generator.
//!
//! For every opted-in persistent class the [`Generator`] writes up to three
//! sources next to each other in the class's package:
//!
//! - `<Name>CRUD` - an interface whose default methods count, list, find,
//!   create, update and delete through a `jakarta.persistence.EntityManager`
//! - `<Name>DTI` - the transfer interface with its static copy routines and
//!   a delegating `Wrapper`
//! - `<Name>DTO` - the plain serializable transfer class

mod generator;
mod java_file;
mod transfer;

pub mod ast;
pub mod files;

pub use ast::{Field, Method, Param, TypeDecl, TypeKind};
pub use crudgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::Generator;
pub use java_file::JavaFile;
pub use transfer::{Transfer, TransferProperty, transfer_properties};
