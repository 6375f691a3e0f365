//! `index.js` entry point generator.

use std::path::{Path, PathBuf};

use postgen_core::GeneratedFile;

use crate::{ast::Export, code_file::CodeFile};

/// Package entry point re-exporting the facade and the services namespace.
pub struct IndexJs;

impl GeneratedFile for IndexJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("index.js")
    }

    fn render(&self) -> String {
        CodeFile::new()
            .export(
                Export::new()
                    .from("./ApiManager")
                    .named("ApiManager")
                    .named("apiManager"),
            )
            .export(Export::new().from("./services").namespace("services"))
            .render()
    }
}
