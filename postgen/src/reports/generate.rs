//! Generate command report data structures.

use std::path::PathBuf;

use postgen_core::PreviewFile;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Collection name, if the export carries one.
    pub collection_name: Option<String>,

    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,

    /// Number of callable operations in the normalized tree.
    pub operation_count: usize,

    /// Number of service modules, nested ones included.
    pub service_count: usize,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Top-level services found on disk, as exported by the barrel.
    pub services: Vec<String>,
    pub files: Vec<PathBuf>,
    /// Whether the formatter was started.
    pub formatted: bool,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if let Some(name) = &self.collection_name {
            out.preformatted(name);
            out.newline();
        }

        out.section(&format!("Services ({})", written.services.len()));
        for service in &written.services {
            out.added_item(service);
        }
        out.newline();

        out.key_value(
            "Generated",
            &format!(
                "{} ({} operations, {} modules, {} files)",
                written.output_dir.display(),
                self.operation_count,
                self.service_count,
                written.files.len()
            ),
        );
        if written.formatted {
            out.key_value("Formatting", "started in the background");
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
