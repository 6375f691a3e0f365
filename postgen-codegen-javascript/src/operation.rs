//! Rendering of a single operation as a member of a service factory.

use postgen_codegen::naming::{NamingConvention, is_identifier};
use postgen_ir::{Inputs, Operation, ParamType};

use crate::ast::{ArrowFn, JsObject, Property, string_literal};

/// Binding of the HTTP client inside a service module.
pub const HTTP_CLIENT_LOCAL: &str = "axios";

/// An operation paired with its member name.
///
/// Renders as an async arrow function that sends the request through the
/// shared client and returns the response payload:
///
/// ```text
/// create: async (name, age = undefined) => {
///   const endpoint = 'users';
///   const response = await axios.post(`${apiPath}/${endpoint}`, { name, age });
///   return response.data;
/// },
/// ```
pub struct OperationTemplate<'a> {
    name: &'a str,
    operation: &'a Operation,
    naming: &'a NamingConvention,
}

impl<'a> OperationTemplate<'a> {
    pub fn new(name: &'a str, operation: &'a Operation, naming: &'a NamingConvention) -> Self {
        Self {
            name,
            operation,
            naming,
        }
    }

    /// The factory member for this operation.
    pub fn property(&self) -> Property {
        let params = self.operation.inputs.params();

        let mut func = ArrowFn::new().async_();
        for param in params {
            let binding = self.naming.safe_name(&param.key);
            func = if param.required {
                func.param(binding)
            } else {
                func.param(format!("{binding} = undefined"))
            };
        }
        let func = func.body_lines([
            format!(
                "const endpoint = {};",
                string_literal(&self.operation.endpoint)
            ),
            format!(
                "const response = await {}(`${{apiPath}}/${{endpoint}}`, {});",
                self.client_call(),
                self.payload()
            ),
            "return response.data;".to_string(),
        ]);

        Property::arrow_fn(self.name, func).with_doc(self.doc())
    }

    /// `@param` lines, empty when the operation takes no inputs.
    fn doc(&self) -> Vec<String> {
        self.operation
            .inputs
            .params()
            .iter()
            .map(|param| {
                let binding = self.naming.safe_name(&param.key);
                let name = if param.required {
                    binding
                } else {
                    format!("[{binding}]")
                };
                format!("@param {{{}}} {}", jsdoc_type(param.ty), name)
            })
            .collect()
    }

    fn client_call(&self) -> String {
        let method = &self.operation.method;
        if is_identifier(method) {
            format!("{HTTP_CLIENT_LOCAL}.{method}")
        } else {
            format!("{}[{}]", HTTP_CLIENT_LOCAL, string_literal(method))
        }
    }

    fn payload(&self) -> String {
        let fields = |params: &[postgen_ir::Param]| {
            params.iter().fold(JsObject::new(), |obj, param| {
                obj.raw(&param.key, self.naming.safe_name(&param.key))
            })
        };

        match &self.operation.inputs {
            Inputs::None => JsObject::new().inline(),
            Inputs::Form(params) => fields(params).inline(),
            Inputs::Query(params) => JsObject::new().object("params", fields(params)).inline(),
        }
    }
}

fn jsdoc_type(ty: ParamType) -> &'static str {
    match ty {
        ParamType::Number => "number",
        ParamType::String => "string",
        ParamType::StringArray => "string[]",
        ParamType::Any => "any",
    }
}
