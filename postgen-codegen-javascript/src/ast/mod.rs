//! JavaScript AST builders for imports, exports, object literals and functions.
//!
//! These provide a high-level API for constructing JavaScript syntax,
//! which can then be rendered via CodeBuilder.

mod exports;
mod imports;
mod objects;

pub use exports::Export;
pub use imports::Import;
pub use objects::{ArrowFn, JsObject, Property, PropertyValue, property_key, string_literal};

/// A name in an import or export list, optionally renamed (`a as b`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Specifier {
    name: String,
    alias: Option<String>,
}

impl Specifier {
    pub(crate) fn new(name: impl Into<String>, alias: Option<String>) -> Self {
        let name = name.into();
        // `a as a` is just `a`
        let alias = alias.filter(|alias| *alias != name);
        Self { name, alias }
    }

    pub(crate) fn render(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{} as {}", self.name, alias),
            None => self.name.clone(),
        }
    }
}

pub(crate) fn render_specifiers(specifiers: &[Specifier]) -> String {
    specifiers
        .iter()
        .map(Specifier::render)
        .collect::<Vec<_>>()
        .join(", ")
}
