//! Tree command report.

use super::output::{Output, Report};

#[derive(Debug)]
pub struct TreeReport {
    pub collection_name: Option<String>,
    pub operation_count: usize,
    /// Outline or JSON rendering of the operation tree.
    pub tree: String,
    /// Every diagnostic of the normalize phase, dropped requests included.
    pub diagnostics: Vec<String>,
}

impl Report for TreeReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(name) = &self.collection_name {
            out.key_value("Collection", name);
        }
        out.key_value("Operations", &self.operation_count.to_string());
        out.newline();
        out.preformatted(&self.tree);

        if !self.diagnostics.is_empty() {
            out.newline();
            out.section("Diagnostics");
            for diagnostic in &self.diagnostics {
                out.list_item(diagnostic);
            }
        }
    }
}
