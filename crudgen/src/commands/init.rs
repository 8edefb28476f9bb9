use std::path::PathBuf;

use clap::Args;
use crudgen_codegen::generation::StarterManifest;
use crudgen_core::{GeneratedFile, Overwrite, WriteResult};
use crudgen_manifest::Manifest;
use dialoguer::{Confirm, theme::ColorfulTheme};
use eyre::{Context, Result};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct InitCommand {
    /// Directory to write crudgen.toml into
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Package of the sample classes
    #[arg(short, long, default_value = "com.example")]
    pub package: String,

    /// Directory generated sources are written to
    #[arg(short, long, default_value = "generated")]
    pub output: String,

    /// Overwrite an existing crudgen.toml without asking
    #[arg(short, long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let starter = StarterManifest::new(&self.package).with_output_dir(&self.output);
        let path = starter.path(&self.dir);

        let overwrite = if self.force {
            Overwrite::Always
        } else if path.exists() {
            if !Self::confirm_overwrite(&path)? {
                println!("Left {} unchanged", path.display());
                return Ok(());
            }
            Overwrite::Always
        } else {
            Overwrite::IfMissing
        };

        match starter.with_overwrite(overwrite).write(&self.dir)? {
            WriteResult::Written => println!("Created {}", path.display()),
            WriteResult::Skipped => println!("Left {} unchanged", path.display()),
        }

        // The starter must parse, or the first `generate` would fail
        Manifest::from_file(&path).unwrap_or_exit();

        println!();
        println!("Next steps:");
        println!("  describe your classes in {}", path.display());
        println!("  crudgen generate -c {}", path.display());

        Ok(())
    }

    fn confirm_overwrite(path: &std::path::Path) -> Result<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} exists. Overwrite it?", path.display()))
            .default(false)
            .interact()
            .wrap_err("Failed to read confirmation")
    }
}
