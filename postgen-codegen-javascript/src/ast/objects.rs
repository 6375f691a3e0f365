//! JavaScript object literal builder.

use postgen_codegen::{
    builder::{CodeBuilder, CodeFragment, Renderable},
    naming::is_identifier,
};

/// A property in a JavaScript object literal.
#[derive(Debug, Clone)]
pub struct Property {
    pub key: String,
    pub value: PropertyValue,
    /// JSDoc lines emitted above the property in block form.
    pub doc: Vec<String>,
}

/// The value of an object property.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    /// A literal string value (will be quoted).
    String(String),
    /// A raw expression (will not be quoted).
    Raw(String),
    /// A nested object.
    Object(JsObject),
    /// An arrow function body.
    ArrowFn(ArrowFn),
}

impl Property {
    fn new(key: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            key: key.into(),
            value,
            doc: Vec::new(),
        }
    }

    /// Create a property with a string value (will be quoted).
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, PropertyValue::String(value.into()))
    }

    /// Create a property with a raw expression value (will not be quoted).
    pub fn raw(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, PropertyValue::Raw(value.into()))
    }

    /// Create a property with a nested object value.
    pub fn object(key: impl Into<String>, value: JsObject) -> Self {
        Self::new(key, PropertyValue::Object(value))
    }

    /// Create a property with an arrow function value.
    pub fn arrow_fn(key: impl Into<String>, value: ArrowFn) -> Self {
        Self::new(key, PropertyValue::ArrowFn(value))
    }

    /// Create a shorthand property where key equals the variable name.
    pub fn shorthand(name: impl Into<String>) -> Self {
        let n = name.into();
        Self::new(n.clone(), PropertyValue::Raw(n))
    }

    /// Attach JSDoc lines.
    pub fn with_doc(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.doc = lines.into_iter().map(Into::into).collect();
        self
    }

    fn is_shorthand(&self) -> bool {
        matches!(&self.value, PropertyValue::Raw(value) if *value == self.key && is_identifier(value))
    }

    fn inline(&self) -> String {
        if self.is_shorthand() {
            return self.key.clone();
        }
        let key = property_key(&self.key);
        match &self.value {
            PropertyValue::String(s) => format!("{}: {}", key, string_literal(s)),
            PropertyValue::Raw(s) => format!("{key}: {s}"),
            PropertyValue::Object(obj) => format!("{}: {}", key, obj.inline()),
            PropertyValue::ArrowFn(func) => {
                format!("{}: {} {{ {} }}", key, func.signature(), func.body.join(" "))
            }
        }
    }

    fn to_fragment(&self) -> CodeFragment {
        let key = property_key(&self.key);
        let value = match &self.value {
            PropertyValue::Object(obj) if !obj.is_empty() => CodeFragment::Block {
                header: format!("{key}: {{"),
                body: obj.properties_to_fragments(),
                close: Some("},".to_string()),
            },
            PropertyValue::ArrowFn(func) => CodeFragment::Block {
                header: format!("{}: {} {{", key, func.signature()),
                body: func
                    .body
                    .iter()
                    .map(|line| CodeFragment::Line(line.clone()))
                    .collect(),
                close: Some("},".to_string()),
            },
            _ => CodeFragment::Line(format!("{},", self.inline())),
        };

        if self.doc.is_empty() {
            value
        } else {
            CodeFragment::Sequence(vec![CodeFragment::jsdoc(self.doc.clone()), value])
        }
    }
}

/// An arrow function for use as a property value.
#[derive(Debug, Clone)]
pub struct ArrowFn {
    pub params: Vec<String>,
    pub is_async: bool,
    pub body: Vec<String>,
}

impl ArrowFn {
    pub fn new() -> Self {
        Self {
            params: Vec::new(),
            is_async: false,
            body: Vec::new(),
        }
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    /// Add a parameter, including any default (e.g. `page = undefined`).
    pub fn param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn body_lines(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for line in lines {
            self.body.push(line.into());
        }
        self
    }

    /// `async (a, b) =>`
    pub fn signature(&self) -> String {
        let async_kw = if self.is_async { "async " } else { "" };
        format!("{}({}) =>", async_kw, self.params.join(", "))
    }
}

impl Default for ArrowFn {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for JavaScript object literals.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a prepared property.
    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Add a property with a string value (will be quoted).
    pub fn string(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.property(Property::string(key, value))
    }

    /// Add a property with a raw expression value (will not be quoted).
    pub fn raw(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.property(Property::raw(key, value))
    }

    /// Add a property with a nested object value.
    pub fn object(self, key: impl Into<String>, value: JsObject) -> Self {
        self.property(Property::object(key, value))
    }

    /// Add an arrow function property.
    pub fn arrow_fn(self, key: impl Into<String>, value: ArrowFn) -> Self {
        self.property(Property::arrow_fn(key, value))
    }

    /// Add a shorthand property where key equals the variable name.
    pub fn shorthand(self, name: impl Into<String>) -> Self {
        self.property(Property::shorthand(name))
    }

    /// Check if the object is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Render the object on a single line (`{ a, b: c }`).
    pub fn inline(&self) -> String {
        if self.properties.is_empty() {
            return "{}".to_string();
        }
        let properties = self
            .properties
            .iter()
            .map(Property::inline)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{ {properties} }}")
    }

    /// Render the object literal to a CodeBuilder.
    pub fn render(&self, mut builder: CodeBuilder) -> CodeBuilder {
        builder.emit(self);
        builder
    }

    /// Build the object as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::javascript()).build()
    }

    /// Convert properties to code fragments, one member per entry.
    pub fn properties_to_fragments(&self) -> Vec<CodeFragment> {
        self.properties.iter().map(Property::to_fragment).collect()
    }
}

impl Renderable for JsObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.properties.is_empty() {
            return vec![CodeFragment::Raw("{}".to_string())];
        }

        vec![CodeFragment::Block {
            header: "{".to_string(),
            body: self.properties_to_fragments(),
            close: Some("}".to_string()),
        }]
    }
}

/// Render an object key: bare when it is an identifier, quoted otherwise.
pub fn property_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        string_literal(key)
    }
}

/// Render a single-quoted string literal.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}
