//! Generated scaffolding.
//!
//! - [`StarterManifest`] - starter crudgen.toml written by `crudgen init`

mod starter_manifest;

pub use starter_manifest::StarterManifest;
