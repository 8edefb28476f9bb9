use std::{collections::HashSet, path::Path};

use crudgen_codegen::{
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::CompilationContext,
    plan::{ArtifactKind, GenerationPlan, PlannedArtifact, PlannedClass},
};
use crudgen_core::GeneratedFile;
use crudgen_ir::{ClassModel, Metamodel};
use eyre::{Result, eyre};
use tracing::{debug, info};

use crate::files::{CrudInterface, TransferClass, TransferInterface};

/// Java generator producing the CRUD, DTO and DTI sources of a plan.
pub struct Generator {
    metamodel: Metamodel,
    plan: GenerationPlan,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "java"
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.preview_files()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_files(output_dir)
    }
}

impl Generator {
    pub fn new(metamodel: Metamodel, plan: GenerationPlan) -> Self {
        Self { metamodel, plan }
    }

    /// Take the metamodel and plan out of a finished pipeline run.
    pub fn from_context(mut ctx: CompilationContext) -> Result<Self> {
        let metamodel = ctx.take_metamodel()?;
        let plan = ctx.take_plan()?;
        Ok(Self::new(metamodel, plan))
    }

    pub fn plan(&self) -> &GenerationPlan {
        &self.plan
    }

    /// Preview generated files without writing to disk
    fn preview_files(&self) -> Vec<PreviewFile> {
        let mut pass = GenerationPass::default();
        let mut files = Vec::new();

        for artifact in self.artifacts() {
            let artifact = match artifact {
                Ok(artifact) => artifact,
                Err(err) => {
                    debug!("{}", err);
                    continue;
                }
            };
            if !pass.claim(&artifact.qualified_name) {
                continue;
            }
            files.push(PreviewFile {
                path: artifact.file.path(Path::new("")).display().to_string(),
                content: artifact.file.render(),
            });
        }

        files
    }

    /// Generate all files into the specified output directory
    fn generate_files(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut pass = GenerationPass::default();
        let mut result = GenerateResult::default();

        for artifact in self.artifacts() {
            let artifact = artifact?;
            if !pass.claim(&artifact.qualified_name) {
                info!(artifact = %artifact.qualified_name, "already generated in this pass, skipping");
                result.skipped.push(artifact.qualified_name);
                continue;
            }
            artifact.file.write(output_dir)?;
            debug!(
                artifact = %artifact.qualified_name,
                kind = %artifact.kind,
                "generated"
            );
            result.written.push(artifact.qualified_name);
        }

        Ok(result)
    }

    /// Every planned artifact with its emitter, in plan order.
    fn artifacts(&self) -> impl Iterator<Item = Result<Artifact<'_>>> {
        self.plan
            .artifacts()
            .map(move |(planned_class, planned)| self.artifact(planned_class, planned))
    }

    fn artifact(&self, planned_class: &PlannedClass, planned: &PlannedArtifact) -> Result<Artifact<'_>> {
        let class = self.metamodel.get(&planned_class.qualified_name).ok_or_else(|| {
            eyre!(
                "planned class '{}' is not in the metamodel",
                planned_class.qualified_name
            )
        })?;
        Ok(Artifact {
            kind: planned.kind,
            qualified_name: planned.qualified_name.clone(),
            file: self.emitter(class, planned.kind),
        })
    }

    fn emitter<'a>(&'a self, class: &'a ClassModel, kind: ArtifactKind) -> Box<dyn GeneratedFile + 'a> {
        match kind {
            ArtifactKind::Crud => Box::new(CrudInterface::new(class)),
            ArtifactKind::Dto => Box::new(TransferClass::new(&self.metamodel, class)),
            ArtifactKind::Dti => Box::new(TransferInterface::new(&self.metamodel, class)),
        }
    }
}

struct Artifact<'a> {
    kind: ArtifactKind,
    qualified_name: String,
    file: Box<dyn GeneratedFile + 'a>,
}

/// State of one generation pass: the fully-qualified names already emitted.
#[derive(Default)]
struct GenerationPass {
    generated: HashSet<String>,
}

impl GenerationPass {
    /// Returns false when the name was already produced in this pass.
    fn claim(&mut self, qualified_name: &str) -> bool {
        self.generated.insert(qualified_name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_claims_each_name_once() {
        let mut pass = GenerationPass::default();
        assert!(pass.claim("com.example.CustomerDTO"));
        assert!(pass.claim("com.example.CustomerDTI"));
        assert!(!pass.claim("com.example.CustomerDTO"));
    }
}
