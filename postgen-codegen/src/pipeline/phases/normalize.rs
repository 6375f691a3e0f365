//! Normalize phase - turns the raw collection into an operation tree.
//!
//! Every folder and request name is sanitized into a key. Requests become
//! [`Operation`]s whose inputs are derived from the form body or the query
//! string. Requests that cannot be called (no method, no path) are dropped
//! and reported as info diagnostics.

use std::{collections::HashSet, sync::LazyLock};

use eyre::Result;
use postgen_collection::{Collection, FormField, Item, ItemKind, QueryParam, Request};
use postgen_ir::{Folder, Inputs, Node, Operation, OperationTree, Param, ParamType};
use regex::Regex;

use crate::{
    naming::{JAVASCRIPT_NAMING, NamingConvention},
    pipeline::{CompilationContext, Diagnostic, Phase},
};

const PHASE: &str = "normalize";

/// Substring marking a form field as required.
const REQUIRED_MARKER: &str = "required";

static ARRAY_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*\]").expect("valid array bracket regex"));
static NUMBER_HINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(int|float)\b").expect("valid number regex"));
static STRING_HINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bstring\b").expect("valid string regex"));

/// Phase that builds the canonical operation tree.
#[derive(Debug, Clone, Copy)]
pub struct NormalizePhase {
    naming: NamingConvention,
}

impl NormalizePhase {
    pub fn new(naming: NamingConvention) -> Self {
        Self { naming }
    }
}

impl Default for NormalizePhase {
    fn default() -> Self {
        Self::new(JAVASCRIPT_NAMING)
    }
}

impl Phase for NormalizePhase {
    fn name(&self) -> &'static str {
        PHASE
    }

    fn description(&self) -> &'static str {
        "Normalize the collection into an operation tree"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let (tree, diagnostics) = normalize(&ctx.collection, &self.naming);
        ctx.tree = Some(tree);
        ctx.diagnostics.extend(diagnostics);
        Ok(())
    }
}

/// Normalize a collection into an operation tree.
///
/// Never fails: unusable nodes are dropped and reported in the returned
/// diagnostics.
pub fn normalize(
    collection: &Collection,
    naming: &NamingConvention,
) -> (OperationTree, Vec<Diagnostic>) {
    let mut normalizer = Normalizer {
        naming,
        diagnostics: Vec::new(),
    };
    let root = normalizer.folder(&collection.item, &mut Vec::new());
    (OperationTree::new(root), normalizer.diagnostics)
}

struct Normalizer<'a> {
    naming: &'a NamingConvention,
    diagnostics: Vec<Diagnostic>,
}

impl Normalizer<'_> {
    fn folder<'i>(&mut self, items: &'i [Item], location: &mut Vec<&'i str>) -> Folder {
        let mut folder = Folder::new();

        for item in items {
            location.push(&item.name);
            let key = self.naming.key(&item.name);

            if key.is_empty() {
                self.warn(
                    format!("name '{}' has no usable characters, skipped", item.name),
                    location,
                );
            } else {
                let node = match item.kind() {
                    ItemKind::Folder(children) => Some(Node::Folder(self.folder(children, location))),
                    ItemKind::Request(request) => {
                        self.operation(request, location).map(Node::Operation)
                    }
                    ItemKind::Empty => {
                        self.info("item has neither children nor a request, dropped", location);
                        None
                    }
                };

                if let Some(node) = node
                    && folder.insert(key.clone(), node).is_some()
                {
                    self.warn(
                        format!("'{key}' is defined more than once, the last definition wins"),
                        location,
                    );
                }
            }

            location.pop();
        }

        folder
    }

    fn operation(&mut self, request: &Request, location: &[&str]) -> Option<Operation> {
        let Some(method) = request.method.as_deref().map(str::trim).filter(|m| !m.is_empty())
        else {
            self.info("request has no method, dropped", location);
            return None;
        };
        let Some(url) = request.url.as_ref().filter(|url| !url.path.is_empty()) else {
            self.info("request has no path, dropped", location);
            return None;
        };

        let form = request.body.as_ref().and_then(|body| body.form_fields());
        let inputs = match form {
            Some(fields) => Inputs::Form(self.form_params(fields, location)),
            None => {
                let params = self.query_params(&url.query, location);
                if params.is_empty() {
                    Inputs::None
                } else {
                    Inputs::Query(params)
                }
            }
        };

        Some(Operation::new(method, url.endpoint()).with_inputs(inputs))
    }

    /// Form fields, required first. Array fields (`tags[]`) collapse into one
    /// parameter named after their base key.
    fn form_params(&mut self, fields: &[FormField], location: &[&str]) -> Vec<Param> {
        let mut sorted: Vec<&FormField> = fields.iter().collect();
        sorted.sort_by_key(|field| !is_required(field.description()));

        let mut groups = HashSet::new();
        let mut bindings = HashSet::new();
        let mut params = Vec::new();

        for field in sorted {
            let is_array = ARRAY_BRACKETS.is_match(&field.key);
            let key = ARRAY_BRACKETS.replace(&field.key, "").into_owned();
            if key.trim().is_empty() || groups.contains(&key) {
                continue;
            }
            if is_array {
                groups.insert(key.clone());
            }
            if !bindings.insert(self.naming.safe_name(&key)) {
                self.duplicate_param(&key, location);
                continue;
            }

            let description = field.description();
            let ty = if is_array {
                ParamType::StringArray
            } else {
                infer_type(description)
            };
            params.push(Param {
                key,
                ty,
                required: is_required(description),
            });
        }

        params
    }

    /// Query parameters, all optional.
    fn query_params(&mut self, query: &[QueryParam], location: &[&str]) -> Vec<Param> {
        let mut bindings = HashSet::new();
        let mut params = Vec::new();

        for key in query
            .iter()
            .filter_map(|param| param.key.as_deref())
            .filter(|key| !key.trim().is_empty())
        {
            if !bindings.insert(self.naming.safe_name(key)) {
                self.duplicate_param(key, location);
                continue;
            }
            params.push(Param::optional(key, ParamType::Any));
        }

        params
    }

    fn duplicate_param(&mut self, key: &str, location: &[&str]) {
        self.warn(
            format!("parameter '{key}' is declared more than once, keeping the first"),
            location,
        );
    }

    fn warn(&mut self, message: impl Into<String>, location: &[&str]) {
        self.diagnostics
            .push(Diagnostic::warning(PHASE, message).at(location.join("/")));
    }

    fn info(&mut self, message: impl Into<String>, location: &[&str]) {
        self.diagnostics
            .push(Diagnostic::info(PHASE, message).at(location.join("/")));
    }
}

fn is_required(description: &str) -> bool {
    description.contains(REQUIRED_MARKER)
}

fn infer_type(description: &str) -> ParamType {
    if NUMBER_HINT.is_match(description) {
        ParamType::Number
    } else if STRING_HINT.is_match(description) {
        ParamType::String
    } else {
        ParamType::Any
    }
}

#[cfg(test)]
mod tests {
    use postgen_ir::Node;

    use super::*;
    use crate::pipeline::Severity;

    fn run(json: &str) -> (OperationTree, Vec<Diagnostic>) {
        let collection: Collection = json.parse().expect("Failed to parse test collection");
        normalize(&collection, &JAVASCRIPT_NAMING)
    }

    fn operation<'a>(tree: &'a OperationTree, path: &[&str]) -> &'a Operation {
        let (last, folders) = path.split_last().unwrap();
        let mut folder = tree.root();
        for name in folders {
            folder = folder.get(name).and_then(Node::as_folder).unwrap();
        }
        folder.get(last).and_then(Node::as_operation).unwrap()
    }

    #[test]
    fn test_users_folder_with_plain_request() {
        let (tree, diagnostics) = run(
            r#"{ "item": [{ "name": "Users", "item": [
                { "name": "users", "request": { "method": "GET", "urlObject": { "path": ["users"] } } }
            ] }] }"#,
        );
        assert!(diagnostics.is_empty());

        let op = operation(&tree, &["Users", "users"]);
        assert_eq!(op.method, "get");
        assert_eq!(op.endpoint, "users");
        assert_eq!(op.inputs, Inputs::None);
    }

    #[test]
    fn test_form_fields_required_first_with_array_group() {
        let (tree, _) = run(
            r#"{ "item": [{ "name": "Users", "item": [{ "name": "Create", "request": {
                "method": "POST",
                "urlObject": { "path": ["users"] },
                "body": { "mode": "formdata", "formdata": [
                    { "key": "age[]", "description": "int" },
                    { "key": "name", "description": "required string" },
                    { "key": "age[]", "description": "int" }
                ] }
            } }] }] }"#,
        );

        let op = operation(&tree, &["Users", "Create"]);
        assert_eq!(
            op.inputs,
            Inputs::Form(vec![
                Param::required("name", ParamType::String),
                Param::optional("age", ParamType::StringArray),
            ])
        );
    }

    #[test]
    fn test_stable_sort_keeps_relative_order() {
        let (tree, _) = run(
            r#"{ "item": [{ "name": "save", "request": {
                "method": "PUT",
                "urlObject": { "path": ["items"] },
                "body": { "formdata": [
                    { "key": "a", "description": "float" },
                    { "key": "b", "description": "required" },
                    { "key": "c", "description": "" },
                    { "key": "d", "description": "required int" }
                ] }
            } }] }"#,
        );

        let keys: Vec<_> = operation(&tree, &["save"])
            .inputs
            .params()
            .iter()
            .map(|p| (p.key.as_str(), p.required, p.ty))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("b", true, ParamType::Any),
                ("d", true, ParamType::Number),
                ("a", false, ParamType::Number),
                ("c", false, ParamType::Any),
            ]
        );
    }

    #[test]
    fn test_array_group_swallows_later_plain_field() {
        let (tree, _) = run(
            r#"{ "item": [{ "name": "tag", "request": {
                "method": "POST",
                "urlObject": { "path": ["tags"] },
                "body": { "formdata": [
                    { "key": "ids[0]", "description": "required" },
                    { "key": "ids[1]", "description": "required" },
                    { "key": "ids", "description": "string" }
                ] }
            } }] }"#,
        );
        assert_eq!(
            operation(&tree, &["tag"]).inputs,
            Inputs::Form(vec![Param::required("ids", ParamType::StringArray)])
        );
    }

    #[test]
    fn test_query_params_all_optional() {
        let (tree, _) = run(
            r#"{ "item": [{ "name": "search", "request": {
                "method": "GET",
                "urlObject": { "path": ["search"], "query": [
                    { "key": "q", "description": "required string" },
                    { "key": null },
                    { "key": "page" }
                ] }
            } }] }"#,
        );
        assert_eq!(
            operation(&tree, &["search"]).inputs,
            Inputs::Query(vec![
                Param::optional("q", ParamType::Any),
                Param::optional("page", ParamType::Any),
            ])
        );
    }

    #[test]
    fn test_form_takes_precedence_over_query() {
        let (tree, _) = run(
            r#"{ "item": [{ "name": "upload", "request": {
                "method": "POST",
                "urlObject": { "path": ["files"], "query": [{ "key": "dry" }] },
                "body": { "formdata": [] }
            } }] }"#,
        );
        assert_eq!(operation(&tree, &["upload"]).inputs, Inputs::Form(Vec::new()));
    }

    #[test]
    fn test_requests_without_method_or_path_are_dropped() {
        let (tree, diagnostics) = run(
            r#"{ "item": [{ "name": "Users", "item": [
                { "name": "no method", "request": { "urlObject": { "path": ["users"] } } },
                { "name": "no path", "request": { "method": "GET", "urlObject": { "path": [] } } },
                { "name": "list", "request": { "method": "GET", "urlObject": { "path": ["users"] } } }
            ] }] }"#,
        );

        let users = tree.root().get("Users").and_then(Node::as_folder).unwrap();
        assert_eq!(users.len(), 1);
        assert!(users.get("list").is_some());

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.severity == Severity::Info));
        assert_eq!(diagnostics[0].location.as_deref(), Some("Users/no method"));
    }

    #[test]
    fn test_colliding_keys_last_write_wins() {
        let (tree, diagnostics) = run(
            r#"{ "item": [
                { "name": "get-user", "request": { "method": "GET", "urlObject": { "path": ["first"] } } },
                { "name": "get user", "request": { "method": "GET", "urlObject": { "path": ["second"] } } }
            ] }"#,
        );

        assert_eq!(tree.root().len(), 1);
        assert_eq!(operation(&tree, &["getUser"]).endpoint, "second");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
    }

    #[test]
    fn test_cyrillic_and_reserved_names() {
        let (tree, _) = run(
            r#"{ "item": [{ "name": "Пользователи", "item": [
                { "name": "delete", "request": { "method": "DELETE", "urlObject": { "path": ["users", ":id"] } } }
            ] }] }"#,
        );
        let op = operation(&tree, &["Polzovateli", "delete"]);
        assert_eq!(op.method, "delete");
        assert_eq!(op.endpoint, "users/:id");
    }

    #[test]
    fn test_unusable_name_is_skipped() {
        let (tree, diagnostics) = run(
            r#"{ "item": [{ "name": "???", "request": { "method": "GET", "urlObject": { "path": ["x"] } } }] }"#,
        );
        assert!(tree.root().is_empty());
        assert_eq!(diagnostics[0].severity, Severity::Warning);
    }

    #[test]
    fn test_empty_folder_is_kept() {
        let (tree, _) = run(r#"{ "item": [{ "name": "Drafts", "item": [] }] }"#);
        let drafts = tree.root().get("Drafts").and_then(Node::as_folder).unwrap();
        assert!(drafts.is_empty());
    }

    #[test]
    fn test_infer_type() {
        assert_eq!(infer_type("required int"), ParamType::Number);
        assert_eq!(infer_type("float value"), ParamType::Number);
        assert_eq!(infer_type("a string"), ParamType::String);
        assert_eq!(infer_type("interval"), ParamType::Any);
        assert_eq!(infer_type(""), ParamType::Any);
    }
}
