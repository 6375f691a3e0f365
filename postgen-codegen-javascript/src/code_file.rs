//! CodeFile abstraction for structured JavaScript module generation.
//!
//! Provides a high-level API for generating ES modules with
//! organized imports, body content, and exports sections.

use postgen_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::{Export, Import};

/// A structured representation of a JavaScript module.
///
/// Organizes code into three sections: imports, body, and exports.
/// Each section is rendered in order with appropriate blank lines.
///
/// # Example
///
/// ```ignore
/// let file = CodeFile::new()
///     .import(Import::new("@/api/instance").named_as("instance", "axios"))
///     .add(factory)
///     .export(Export::new().named_as("_delete", "delete"))
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
    exports: Vec<Export>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add imports from an iterator.
    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Add an export statement.
    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    /// Render the file with JavaScript indentation (2 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::JAVASCRIPT)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        // 1. Render imports
        for import in &self.imports {
            builder.emit(import);
        }

        // 2. Blank line between imports and body
        if !self.imports.is_empty() && (!self.body.is_empty() || !self.exports.is_empty()) {
            builder.push_blank();
        }

        // 3. Render body with blank lines between elements
        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        // 4. Blank line before exports
        if !self.body.is_empty() && !self.exports.is_empty() {
            builder.push_blank();
        }

        // 5. Render exports
        for export in &self.exports {
            builder.emit(export);
        }

        builder.build()
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.is_empty() && self.exports.is_empty()
    }
}

/// A raw code fragment that implements Renderable.
///
/// Useful for adding raw code strings to CodeFile body.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    /// Create a new raw code fragment.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Create a raw code fragment from multiple lines.
    pub fn lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(
            lines
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| {
                if line.is_empty() {
                    CodeFragment::Blank
                } else {
                    CodeFragment::Line(line.to_string())
                }
            })
            .collect()
    }
}
