//! `services/index.js` barrel generator.

use std::path::{Path, PathBuf};

use postgen_codegen::naming::Ident;
use postgen_core::GeneratedFile;

use super::{MODULE_FILE, SERVICES_DIR};
use crate::{
    ast::{Export, Import},
    code_file::CodeFile,
};

/// Re-exports every top-level service under its public name.
pub struct ServicesIndexJs {
    services: Vec<Ident>,
}

impl ServicesIndexJs {
    pub fn new(services: Vec<Ident>) -> Self {
        Self { services }
    }
}

impl GeneratedFile for ServicesIndexJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(SERVICES_DIR).join(MODULE_FILE)
    }

    fn render(&self) -> String {
        let imports = self.services.iter().map(|service| {
            Import::new(format!("./{}", service.name)).named_as(&service.name, &service.binding)
        });
        let export = self.services.iter().fold(Export::new(), |export, service| {
            export.named_as(&service.binding, &service.name)
        });

        CodeFile::new().imports(imports).export(export).render()
    }
}

#[cfg(test)]
mod tests {
    use postgen_codegen::naming::JAVASCRIPT_NAMING;

    use super::*;

    #[test]
    fn test_barrel() {
        let services = ["rootRequests", "users"]
            .into_iter()
            .map(|name| JAVASCRIPT_NAMING.ident(name))
            .collect();
        assert_eq!(
            ServicesIndexJs::new(services).render(),
            "import { rootRequests } from './rootRequests';\n\
             import { users } from './users';\n\
             \n\
             export { rootRequests, users };\n"
        );
    }

    #[test]
    fn test_barrel_aliases_reserved_names() {
        let services = vec![JAVASCRIPT_NAMING.ident("delete")];
        assert_eq!(
            ServicesIndexJs::new(services).render(),
            "import { delete as _delete } from './delete';\n\
             \n\
             export { _delete as delete };\n"
        );
    }

    #[test]
    fn test_empty_barrel() {
        let file = ServicesIndexJs::new(Vec::new());
        assert_eq!(file.render(), "export {};\n");
        assert_eq!(
            file.path(Path::new("src/api")),
            Path::new("src/api/services/index.js")
        );
    }
}
