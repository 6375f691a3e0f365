//! JavaScript export builder.

use postgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::{Specifier, render_specifiers, string_literal};

/// Builder for ES module export statements.
#[derive(Debug, Clone)]
pub struct Export {
    from: Option<String>,
    namespace: Option<String>,
    named: Vec<Specifier>,
}

impl Export {
    pub fn new() -> Self {
        Self {
            from: None,
            namespace: None,
            named: Vec::new(),
        }
    }

    /// Re-export from another module.
    pub fn from(mut self, module: impl Into<String>) -> Self {
        self.from = Some(module.into());
        self
    }

    /// Re-export a whole module as a namespace (`export * as name from`).
    pub fn namespace(mut self, name: impl Into<String>) -> Self {
        self.namespace = Some(name.into());
        self
    }

    /// Export a named item.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(Specifier::new(name, None));
        self
    }

    /// Export a local binding under another name (`local as name`).
    pub fn named_as(mut self, local: impl Into<String>, name: impl Into<String>) -> Self {
        self.named.push(Specifier::new(local, Some(name.into())));
        self
    }

    fn statement(&self) -> String {
        match (&self.from, &self.namespace, self.named.is_empty()) {
            // export * from 'module'
            (Some(from), None, true) => format!("export * from {};", string_literal(from)),
            // export * as name from 'module'
            (Some(from), Some(ns), true) => {
                format!("export * as {} from {};", ns, string_literal(from))
            }
            // export { a, b } from 'module'
            (Some(from), None, false) => format!(
                "export {{ {} }} from {};",
                render_specifiers(&self.named),
                string_literal(from)
            ),
            // export { a, b }
            (None, None, false) => format!("export {{ {} }};", render_specifiers(&self.named)),
            // export {}
            (None, None, true) => "export {};".to_string(),
            // Invalid combinations - return empty
            _ => String::new(),
        }
    }

    /// Render the export to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let statement = self.statement();
        if statement.is_empty() {
            builder
        } else {
            builder.line(&statement)
        }
    }

    /// Build the export as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::javascript()).build()
    }
}

impl Default for Export {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let statement = self.statement();
        if statement.is_empty() {
            Vec::new()
        } else {
            vec![CodeFragment::Line(statement)]
        }
    }
}
