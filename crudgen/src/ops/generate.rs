//! Generate operation - Java sources from the manifest.

use std::path::Path;

use crudgen_codegen::{
    language::LanguageCodegen,
    pipeline::{Pipeline, SnapshotPlugin},
};
use crudgen_codegen_java::Generator;
use crudgen_manifest::Manifest;
use eyre::{Context, Result};
use tracing::info;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory generated sources are written to.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Where to write pipeline snapshots, if anywhere.
    pub snapshots: Option<&'a Path>,
}

/// Execute the generate operation.
///
/// Runs the pipeline on the manifest and emits the planned artifacts.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let mut pipeline = Pipeline::new();
    if let Some(dir) = opts.snapshots {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(dir));
    }
    let ctx = pipeline.run(manifest.clone()).wrap_err("Pipeline failed")?;

    let warnings: Vec<String> = ctx.warnings().map(|d| d.message.clone()).collect();
    let generator = Generator::from_context(ctx)?;
    let planned = generator.plan().artifact_count();

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let generated = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;
        info!(
            written = generated.written.len(),
            skipped = generated.skipped.len(),
            output = %opts.output_dir.display(),
            "generation finished"
        );

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: generated.written,
            skipped: generated.skipped,
        })
    };

    Ok(GenerateReport {
        warnings,
        planned,
        snapshots_dir: opts.snapshots.map(Path::to_path_buf),
        result,
    })
}
