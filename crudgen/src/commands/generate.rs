use std::path::PathBuf;

use clap::Args;
use crudgen_manifest::{CrudgenToml, MANIFEST_FILE};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to crudgen.toml
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Output directory (overrides `[output] dir`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Write pipeline snapshots as JSON to this directory
    #[arg(long, value_name = "DIR")]
    pub snapshots: Option<PathBuf>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let crudgen_toml = CrudgenToml::open(&self.config).unwrap_or_exit();
        let manifest = crudgen_toml.manifest();

        // The output directory is relative to the manifest unless given on the command line
        let output_dir = match &self.output {
            Some(dir) => dir.clone(),
            None => crudgen_toml
                .path()
                .parent()
                .map(|parent| parent.join(&manifest.output.dir))
                .unwrap_or_else(|| manifest.output.dir.clone()),
        };

        let report = ops::generate(
            manifest,
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
                snapshots: self.snapshots.as_deref(),
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
