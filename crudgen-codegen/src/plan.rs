//! The generation plan computed from the metamodel.
//!
//! [`GenerationPlan`] lists, in declaration order, every class that opts into
//! generation and is eligible for it, together with the artifacts it yields.

use crudgen_ir::{ClassModel, Metamodel};
use serde::Serialize;

/// A kind of derived artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// The read/write interface with the CRUD operations
    Crud,
    /// The plain data-transfer class
    Dto,
    /// The data-transfer interface with the copy routines
    Dti,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Crud => "crud",
            ArtifactKind::Dto => "dto",
            ArtifactKind::Dti => "dti",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One artifact to emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedArtifact {
    pub kind: ArtifactKind,
    /// Fully-qualified name of the generated type
    pub qualified_name: String,
}

/// A source class and the artifacts it yields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedClass {
    pub qualified_name: String,
    pub artifacts: Vec<PlannedArtifact>,
}

/// Everything one generation pass will emit.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationPlan {
    pub classes: Vec<PlannedClass>,
}

impl GenerationPlan {
    /// Plan every opted-in, eligible class of the metamodel.
    ///
    /// Entities yield CRUD, DTO and DTI; embeddables yield DTO and DTI.
    pub fn from_metamodel(metamodel: &Metamodel) -> Self {
        let classes = metamodel
            .iter()
            .filter(|class| class.is_codegen())
            .filter_map(plan_class)
            .collect();
        Self { classes }
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Total number of planned artifacts, duplicates included.
    pub fn artifact_count(&self) -> usize {
        self.classes.iter().map(|c| c.artifacts.len()).sum()
    }

    /// Planned artifacts for a source class.
    pub fn class(&self, qualified_name: &str) -> Option<&PlannedClass> {
        self.classes
            .iter()
            .find(|c| c.qualified_name == qualified_name)
    }

    pub fn artifacts(&self) -> impl Iterator<Item = (&PlannedClass, &PlannedArtifact)> {
        self.classes
            .iter()
            .flat_map(|class| class.artifacts.iter().map(move |a| (class, a)))
    }
}

fn plan_class(class: &ClassModel) -> Option<PlannedClass> {
    let mut artifacts = Vec::new();
    if class.is_crud_eligible() {
        artifacts.push(PlannedArtifact {
            kind: ArtifactKind::Crud,
            qualified_name: class.qualified_crud_name(),
        });
    }
    if class.is_transfer_eligible() {
        artifacts.push(PlannedArtifact {
            kind: ArtifactKind::Dto,
            qualified_name: class.qualified_dto_name(),
        });
        artifacts.push(PlannedArtifact {
            kind: ArtifactKind::Dti,
            qualified_name: class.qualified_dti_name(),
        });
    }

    if artifacts.is_empty() {
        None
    } else {
        Some(PlannedClass {
            qualified_name: class.qualified_name.clone(),
            artifacts,
        })
    }
}
