//! `services/<path>/index.js` generator.

use std::path::{Path, PathBuf};

use postgen_codegen::{
    builder::{CodeFragment, Renderable},
    naming::{Ident, NamingConvention},
    service::{Composition, ImportSpec, Service, ServiceId, ServiceTree, SlotError},
};
use postgen_core::GeneratedFile;

use super::{MODULE_FILE, SERVICES_DIR};
use crate::{
    JsOptions,
    ast::{Export, Import, JsObject, Property},
    code_file::CodeFile,
    operation::{HTTP_CLIENT_LOCAL, OperationTemplate},
};

/// The module of one service: imports, then a factory taking `apiPath` and
/// returning the child services and operations.
///
/// Slots are read when the file is created, so an unresolved service can
/// never be rendered.
#[derive(Debug)]
pub struct ServiceIndexJs<'a> {
    service: &'a Service,
    dir: PathBuf,
    imports: &'a [ImportSpec],
    composition: &'a [Composition],
    options: &'a JsOptions,
    naming: &'a NamingConvention,
}

impl<'a> ServiceIndexJs<'a> {
    pub fn new(
        tree: &'a ServiceTree,
        id: ServiceId,
        options: &'a JsOptions,
        naming: &'a NamingConvention,
    ) -> Result<Self, SlotError> {
        let service = tree.get(id);
        Ok(Self {
            service,
            dir: tree.dir(id),
            imports: service.slots.imports.get(service.name())?,
            composition: service.slots.composition.get(service.name())?,
            options,
            naming,
        })
    }

    /// Module path relative to the output directory, `/`-separated.
    pub fn relative_path(&self) -> String {
        let mut segments: Vec<String> = vec![SERVICES_DIR.to_string()];
        segments.extend(
            self.dir
                .iter()
                .map(|segment| segment.to_string_lossy().into_owned()),
        );
        segments.push(MODULE_FILE.to_string());
        segments.join("/")
    }

    fn import(&self, spec: &ImportSpec) -> Import {
        match spec {
            ImportSpec::HttpClient => Import::new(&self.options.http_client_module)
                .named_as(&self.options.http_client_export, HTTP_CLIENT_LOCAL),
            ImportSpec::Service {
                export,
                local,
                from,
            } => Import::new(from).named_as(export, local),
        }
    }

    fn members(&self) -> JsObject {
        let members = self.composition.iter().fold(JsObject::new(), |obj, child| {
            obj.property(Property::raw(&child.key, format!("{}()", child.local)))
        });
        self.service
            .operations
            .iter()
            .fold(members, |obj, (name, operation)| {
                obj.property(OperationTemplate::new(name, operation, self.naming).property())
            })
    }
}

impl GeneratedFile for ServiceIndexJs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(SERVICES_DIR).join(&self.dir).join(MODULE_FILE)
    }

    fn render(&self) -> String {
        let ident = &self.service.ident;
        let factory = Factory {
            ident,
            members: self.members(),
        };

        let file = CodeFile::new()
            .imports(self.imports.iter().map(|spec| self.import(spec)))
            .add(factory);
        if ident.is_escaped() {
            file.export(Export::new().named_as(&ident.binding, &ident.name))
                .render()
        } else {
            file.render()
        }
    }
}

/// `export const users = (apiPath = '') => ({ ... });`
struct Factory<'a> {
    ident: &'a Ident,
    members: JsObject,
}

impl Renderable for Factory<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        // Escaped bindings are exported under their public name separately.
        let export = if self.ident.is_escaped() { "" } else { "export " };
        let header = format!("{}const {} = (apiPath = '') =>", export, self.ident.binding);

        if self.members.is_empty() {
            return vec![CodeFragment::line(format!("{header} ({{}});"))];
        }
        vec![CodeFragment::block(
            format!("{header} ({{"),
            self.members.properties_to_fragments(),
            Some("});".to_string()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use postgen_codegen::{naming::JAVASCRIPT_NAMING, pipeline::phases::resolve};
    use postgen_ir::{Folder, Node, Operation, OperationTree};

    use super::*;

    fn tree() -> ServiceTree {
        let mut posts = Folder::new();
        posts.insert("list", Node::Operation(Operation::new("GET", "posts")));
        let mut users = Folder::new();
        users.insert("posts", Node::Folder(posts));
        users.insert("get", Node::Operation(Operation::new("GET", "users/:id")));
        let mut root = Folder::new();
        root.insert("users", Node::Folder(users));
        root.insert("delete", Node::Folder(Folder::new()));
        ServiceTree::layout(&OperationTree::new(root), &JAVASCRIPT_NAMING).unwrap()
    }

    #[test]
    fn test_unresolved_service_is_rejected() {
        let tree = tree();
        let options = JsOptions::default();
        let err = ServiceIndexJs::new(&tree, tree.roots()[0], &options, &JAVASCRIPT_NAMING)
            .unwrap_err();
        assert!(matches!(err, SlotError::Unresolved { slot: "imports", .. }));
    }

    #[test]
    fn test_composite_module() {
        let mut tree = tree();
        resolve(&mut tree).unwrap();
        let options = JsOptions::default();
        let users = tree.roots()[0];

        let file = ServiceIndexJs::new(&tree, users, &options, &JAVASCRIPT_NAMING).unwrap();
        assert_eq!(file.relative_path(), "services/users/index.js");
        assert_eq!(
            file.path(Path::new("out")),
            Path::new("out/services/users/index.js")
        );

        let code = file.render();
        assert!(code.starts_with(
            "import { instance as axios } from '@/api/instance';\n\
             import { posts as postsService } from './posts';\n\
             \n\
             export const users = (apiPath = '') => ({\n\
             \x20 posts: postsService(),\n"
        ));
        assert!(code.ends_with("  },\n});\n"));
    }

    #[test]
    fn test_reserved_empty_service() {
        let mut tree = tree();
        resolve(&mut tree).unwrap();
        let options = JsOptions::default();
        let delete = tree.roots()[1];

        let code = ServiceIndexJs::new(&tree, delete, &options, &JAVASCRIPT_NAMING)
            .unwrap()
            .render();
        assert_eq!(
            code,
            "import { instance as axios } from '@/api/instance';\n\
             \n\
             const _delete = (apiPath = '') => ({});\n\
             \n\
             export { _delete as delete };\n"
        );
    }
}
