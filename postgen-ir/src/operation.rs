//! Operation types.
//!
//! An [`Operation`] is one callable request: an HTTP method, an endpoint and
//! the inputs the generated function accepts.

use serde::Serialize;

/// One leaf request of the collection, ready for code generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Operation {
    /// Lower-cased HTTP verb, used as the client method name (e.g. `get`).
    pub method: String,
    /// Path segments joined with `/` (e.g. `users/:id`).
    pub endpoint: String,
    /// Parameters accepted by the generated function.
    pub inputs: Inputs,
}

impl Operation {
    /// Create an operation without inputs. The method is lower-cased.
    pub fn new(method: &str, endpoint: impl Into<String>) -> Self {
        Self {
            method: method.to_lowercase(),
            endpoint: endpoint.into(),
            inputs: Inputs::None,
        }
    }

    /// Set the operation inputs.
    pub fn with_inputs(mut self, inputs: Inputs) -> Self {
        self.inputs = inputs;
        self
    }
}

/// How the inputs of an operation reach the network call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "params", rename_all = "snake_case")]
pub enum Inputs {
    /// No parameters; the call is issued directly.
    #[default]
    None,
    /// Form fields, passed as the request payload. Required fields come first.
    Form(Vec<Param>),
    /// Query parameters, all optional, packed into `{ params: { ... } }`.
    Query(Vec<Param>),
}

impl Inputs {
    /// All parameters, in signature order.
    pub fn params(&self) -> &[Param] {
        match self {
            Inputs::None => &[],
            Inputs::Form(params) | Inputs::Query(params) => params,
        }
    }

    /// Returns true if the generated function takes no parameters.
    pub fn is_empty(&self) -> bool {
        self.params().is_empty()
    }
}

/// A single function parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    /// Key as sent on the wire (array brackets already stripped).
    pub key: String,
    /// Type inferred from the field description.
    pub ty: ParamType,
    /// Required parameters have no default value.
    pub required: bool,
}

impl Param {
    /// Create an optional parameter.
    pub fn optional(key: impl Into<String>, ty: ParamType) -> Self {
        Self {
            key: key.into(),
            ty,
            required: false,
        }
    }

    /// Create a required parameter.
    pub fn required(key: impl Into<String>, ty: ParamType) -> Self {
        Self {
            key: key.into(),
            ty,
            required: true,
        }
    }
}

/// Documentation type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    Number,
    String,
    StringArray,
    Any,
}
