//! JavaScript import builder.

use postgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::{Specifier, render_specifiers, string_literal};

/// Builder for ES module import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    namespace: Option<String>,
    named: Vec<Specifier>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            namespace: None,
            named: Vec::new(),
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import the whole module namespace (`import * as name`).
    pub fn namespace(mut self, name: impl Into<String>) -> Self {
        self.namespace = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(Specifier::new(name, None));
        self
    }

    /// Import a named export under a local binding (`name as local`).
    pub fn named_as(mut self, name: impl Into<String>, local: impl Into<String>) -> Self {
        self.named.push(Specifier::new(name, Some(local.into())));
        self
    }

    fn statement(&self) -> String {
        let from = string_literal(&self.from);
        let mut clauses = Vec::new();
        if let Some(default) = &self.default {
            clauses.push(default.clone());
        }
        if let Some(namespace) = &self.namespace {
            clauses.push(format!("* as {namespace}"));
        }
        if !self.named.is_empty() {
            clauses.push(format!("{{ {} }}", render_specifiers(&self.named)));
        }

        if clauses.is_empty() {
            format!("import {from};")
        } else {
            format!("import {} from {from};", clauses.join(", "))
        }
    }

    /// Render the import to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder.line(&self.statement())
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::javascript()).build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.statement())]
    }
}
