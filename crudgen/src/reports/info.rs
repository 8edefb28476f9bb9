//! Info command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from project info.
#[derive(Debug)]
pub struct InfoReport {
    /// Config file path.
    pub config_path: PathBuf,
    /// Configured output directory.
    pub output_dir: PathBuf,
    /// Manifest statistics.
    pub stats: Stats,
    /// Declared classes in declaration order.
    pub classes: Vec<ClassInfo>,
}

/// Manifest statistics.
#[derive(Debug, Default)]
pub struct Stats {
    pub classes: usize,
    pub entities: usize,
    pub embeddables: usize,
    /// Declared annotation types.
    pub annotations: usize,
    /// Planned artifacts, duplicates included.
    pub artifacts: usize,
}

/// One declared class.
#[derive(Debug)]
pub struct ClassInfo {
    pub qualified_name: String,
    /// "entity", "embeddable" or "class"
    pub kind: &'static str,
    pub properties: usize,
    /// Qualified names of the planned artifacts.
    pub artifacts: Vec<String>,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("crudgen");
        out.key_value("Config", &self.config_path.display().to_string());
        out.key_value("Output", &self.output_dir.display().to_string());
        out.newline();

        out.section("Statistics");
        out.key_value_indented("Classes", &self.stats.classes.to_string());
        out.key_value_indented("Entities", &self.stats.entities.to_string());
        out.key_value_indented("Embeddables", &self.stats.embeddables.to_string());
        out.key_value_indented("Annotations", &self.stats.annotations.to_string());
        out.key_value_indented("Artifacts", &self.stats.artifacts.to_string());

        if self.classes.is_empty() {
            return;
        }

        out.newline();
        out.section("Classes");
        for (i, class) in self.classes.iter().enumerate() {
            out.numbered_item(
                i + 1,
                &format!(
                    "{} ({}, {} properties)",
                    class.qualified_name, class.kind, class.properties
                ),
            );
            for artifact in &class.artifacts {
                out.added_item(&format!("   {}", artifact));
            }
        }
    }
}
