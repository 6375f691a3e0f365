//! Naming conventions for generated JavaScript.
//!
//! Every folder, request and parameter name goes through [`sanitize_name`]
//! before it is used as a key. A key that cannot be used as a binding keeps
//! its public spelling and gets an escaped binding through [`Ident`].

use postgen_core::{to_camel_case, transliterate_cyrillic};

/// Language-specific naming conventions.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a free-form name into a key (e.g. "Get users" -> "GetUsers")
    pub name_to_key: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g. "delete" -> "_delete")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Check if a name is a valid identifier that is not reserved.
    pub fn is_binding(&self, name: &str) -> bool {
        is_identifier(name) && !self.is_reserved(name)
    }

    /// Get a safe binding, escaping if necessary.
    ///
    /// Names that are not identifiers are sanitized first, so `page-size`
    /// binds as `pageSize` rather than an escaped copy of itself.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_binding(name) {
            return name.to_string();
        }
        let sanitized = (self.name_to_key)(name);
        if sanitized != name && self.is_binding(&sanitized) {
            sanitized
        } else {
            (self.escape_reserved)(&sanitized)
        }
    }

    /// Sanitize a free-form name into a key.
    ///
    /// Keys never start with a digit; such names are escaped as part of the
    /// key itself since they cannot be written as bare exports.
    pub fn key(&self, name: &str) -> String {
        let key = (self.name_to_key)(name);
        match key.chars().next() {
            Some(c) if c.is_ascii_digit() => (self.escape_reserved)(&key),
            _ => key,
        }
    }

    /// Public name and local binding for a key.
    pub fn ident(&self, key: &str) -> Ident {
        Ident {
            name: key.to_string(),
            binding: self.safe_name(key),
        }
    }
}

/// A public name together with the binding used for it in generated code.
///
/// The two differ only when the public name is reserved (`delete` is bound as
/// `_delete`) or is not an identifier at all (`page-size` is bound as
/// `pageSize`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    pub name: String,
    pub binding: String,
}

impl Ident {
    /// Returns true if the binding differs from the public name.
    pub fn is_escaped(&self) -> bool {
        self.name != self.binding
    }
}

/// Check whether a name is a syntactically valid identifier.
///
/// Unicode letters are accepted; reserved words are not checked here.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Transliterate and camel-case a name (e.g. "Получить пользователей" ->
/// "PoluchitPolzovateley").
///
/// The result is stable: sanitizing it again returns it unchanged.
pub fn sanitize_name(name: &str) -> String {
    to_camel_case(&transliterate_cyrillic(name))
}

fn escape_with_underscore(name: &str) -> String {
    format!("_{}", name)
}

/// JavaScript naming conventions.
pub const JAVASCRIPT_NAMING: NamingConvention = NamingConvention {
    name_to_key: sanitize_name,
    reserved_words: &[
        // Keywords
        "await",
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        // Reserved in strict mode (modules are always strict)
        "arguments",
        "eval",
        "implements",
        "interface",
        "let",
        "package",
        "private",
        "protected",
        "public",
        "static",
        // Shadowing these breaks the generated bodies
        "undefined",
        "axios",
        "apiPath",
        "endpoint",
        "response",
    ],
    escape_reserved: escape_with_underscore,
};
