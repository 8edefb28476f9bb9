use std::path::PathBuf;

use clap::Args;
use crudgen_manifest::{CrudgenToml, MANIFEST_FILE};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InfoCommand {
    /// Path to crudgen.toml
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,
}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        let crudgen_toml = CrudgenToml::open(&self.config).unwrap_or_exit();

        let report = ops::info(crudgen_toml.manifest(), &self.config)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
