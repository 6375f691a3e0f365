//! `ApiManager.js` facade generator.

use std::path::{Path, PathBuf};

use postgen_codegen::{
    builder::{CodeFragment, Renderable},
    naming::Ident,
};
use postgen_core::GeneratedFile;

use crate::{
    ast::Import,
    code_file::{CodeFile, RawCode},
};

/// Members of the facade class that are not service getters.
///
/// A top-level service with one of these names would shadow them. A getter
/// named `constructor` is a syntax error in a class body.
pub const API_MANAGER_MEMBERS: &[&str] = &["constructor", "onError", "proxyService"];

const MEMBERS: &str = include_str!("../assets/api_manager_members.js");

/// A class with one private field and one getter per top-level service.
pub struct ApiManagerJs {
    services: Vec<Ident>,
}

impl ApiManagerJs {
    pub fn new(services: Vec<Ident>) -> Self {
        Self { services }
    }
}

impl GeneratedFile for ApiManagerJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("ApiManager.js")
    }

    fn render(&self) -> String {
        CodeFile::new()
            .import(Import::new("./services").namespace("services"))
            .add(ApiManagerClass {
                services: &self.services,
            })
            .add(RawCode::new("export const apiManager = new ApiManager();"))
            .render()
    }
}

struct ApiManagerClass<'a> {
    services: &'a [Ident],
}

impl Renderable for ApiManagerClass<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = vec![CodeFragment::line("#errorListeners = new Set();")];

        if !self.services.is_empty() {
            body.push(CodeFragment::blank());
        }
        for service in self.services {
            body.push(CodeFragment::line(format!(
                "#{}Service = this.proxyService(services.{}());",
                service.name, service.name
            )));
        }

        for service in self.services {
            body.push(CodeFragment::blank());
            body.push(CodeFragment::jsdoc([format!(
                "@returns {{ReturnType<typeof services.{}>}}",
                service.name
            )]));
            body.push(CodeFragment::block(
                format!("get {}() {{", service.name),
                vec![CodeFragment::line(format!(
                    "return this.#{}Service;",
                    service.name
                ))],
                Some("}".to_string()),
            ));
        }

        body.push(CodeFragment::blank());
        body.extend(RawCode::new(MEMBERS).to_fragments());

        vec![CodeFragment::block(
            "export class ApiManager {",
            body,
            Some("}".to_string()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use postgen_codegen::naming::JAVASCRIPT_NAMING;

    use super::*;

    #[test]
    fn test_service_getters() {
        let code = ApiManagerJs::new(vec![
            JAVASCRIPT_NAMING.ident("users"),
            JAVASCRIPT_NAMING.ident("delete"),
        ])
        .render();

        assert!(code.starts_with(
            "import * as services from './services';\n\
             \n\
             export class ApiManager {\n\
             \x20 #errorListeners = new Set();\n\
             \n\
             \x20 #usersService = this.proxyService(services.users());\n\
             \x20 #deleteService = this.proxyService(services.delete());\n\
             \n\
             \x20 /**\n\
             \x20  * @returns {ReturnType<typeof services.users>}\n\
             \x20  */\n\
             \x20 get users() {\n\
             \x20   return this.#usersService;\n\
             \x20 }\n"
        ));
        assert!(code.contains("  get delete() {\n"));
        assert!(code.contains("  proxyService(service) {\n"));
        assert!(code.ends_with("}\n\nexport const apiManager = new ApiManager();\n"));
    }

    #[test]
    fn test_members_are_indented_inside_class() {
        let code = ApiManagerJs::new(Vec::new()).render();
        assert!(code.contains("\n  onError(listener) {\n    this.#errorListeners.add(listener);\n"));
        assert!(!code.contains("\n\n\n"));
    }
}
