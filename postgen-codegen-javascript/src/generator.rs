//! JavaScript code generator emitting axios-based service modules.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr, eyre};
use postgen_codegen::{
    naming::{Ident, JAVASCRIPT_NAMING, NamingConvention},
    pipeline::CompilationContext,
    service::ServiceTree,
};
use postgen_core::{GenerateResult, GeneratedFile, LanguageCodegen, PreviewFile};
use tracing::{debug, info};

use crate::{
    Error,
    files::{
        API_MANAGER_MEMBERS, ApiManagerJs, IndexJs, InstanceJs, SERVICES_DIR, ServiceIndexJs,
        ServicesIndexJs,
    },
};

/// Module specifier of the shared HTTP client.
pub const DEFAULT_HTTP_CLIENT_MODULE: &str = "@/api/instance";

/// Options controlling the emitted JavaScript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsOptions {
    /// Module every service imports the HTTP client from.
    pub http_client_module: String,
    /// Named export of the HTTP client in that module.
    pub http_client_export: String,
    /// Write `instance.js` next to the services.
    pub emit_instance: bool,
}

impl Default for JsOptions {
    fn default() -> Self {
        Self {
            http_client_module: DEFAULT_HTTP_CLIENT_MODULE.to_string(),
            http_client_export: "instance".to_string(),
            emit_instance: true,
        }
    }
}

/// JavaScript code generator for a resolved service tree.
pub struct Generator {
    services: ServiceTree,
    options: JsOptions,
    naming: NamingConvention,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "javascript"
    }

    fn file_extension(&self) -> &'static str {
        "js"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        self.preview_files()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_files(output_dir)
    }
}

impl Generator {
    pub fn new(services: ServiceTree) -> Self {
        Self {
            services,
            options: JsOptions::default(),
            naming: JAVASCRIPT_NAMING,
        }
    }

    /// Take the service tree out of a finished pipeline run.
    ///
    /// # Errors
    ///
    /// Fails if the layout phase never ran.
    pub fn from_context(ctx: CompilationContext) -> Result<Self> {
        let services = ctx
            .services
            .ok_or_else(|| eyre!("service tree not set - did LayoutPhase run?"))?;
        Ok(Self::new(services))
    }

    pub fn with_options(mut self, options: JsOptions) -> Self {
        self.options = options;
        self
    }

    pub fn services(&self) -> &ServiceTree {
        &self.services
    }

    /// One module file per service, parents before children.
    ///
    /// # Errors
    ///
    /// Fails if any service still has an unresolved slot.
    pub fn service_files(&self) -> Result<Vec<ServiceIndexJs<'_>>> {
        self.services
            .ids()
            .map(|id| {
                ServiceIndexJs::new(&self.services, id, &self.options, &self.naming)
                    .map_err(eyre::Report::from)
            })
            .collect()
    }

    /// Write every service module under `<output_dir>/services`.
    ///
    /// The services directory is created even when there is nothing to write,
    /// so that aggregation always has a directory to list.
    pub fn materialize(&self, output_dir: &Path) -> Result<Vec<PathBuf>> {
        let services_dir = output_dir.join(SERVICES_DIR);
        std::fs::create_dir_all(&services_dir).wrap_err_with(|| {
            format!("failed to create directory '{}'", services_dir.display())
        })?;

        let mut written = Vec::new();
        for file in self.service_files()? {
            let path = file.write(output_dir)?;
            debug!(path = %path.display(), "wrote service module");
            written.push(path);
        }
        Ok(written)
    }

    /// Write the barrel, the facade and the entry modules for whatever
    /// top-level services exist on disk.
    ///
    /// Returns the services found and the files written.
    pub fn aggregate(&self, output_dir: &Path) -> Result<(Vec<String>, Vec<PathBuf>)> {
        let names = list_services(&output_dir.join(SERVICES_DIR))?;
        let idents: Vec<Ident> = names.iter().map(|name| self.naming.ident(name)).collect();
        check_facade_names(&idents)?;

        let mut written = vec![
            ServicesIndexJs::new(idents.clone()).write(output_dir)?,
            ApiManagerJs::new(idents).write(output_dir)?,
        ];
        if self.options.emit_instance {
            written.push(InstanceJs.write(output_dir)?);
        }
        written.push(IndexJs.write(output_dir)?);

        debug!(services = names.len(), "aggregated services");
        Ok((names, written))
    }

    /// Preview generated files without writing to disk.
    ///
    /// Top-level services are taken from the tree, sorted the way a directory
    /// listing would return them.
    fn preview_files(&self) -> Result<Vec<PreviewFile>> {
        let mut files: Vec<PreviewFile> = self
            .service_files()?
            .into_iter()
            .map(|file| PreviewFile {
                path: file.relative_path(),
                content: file.render(),
            })
            .collect();

        let mut idents: Vec<Ident> = self
            .services
            .roots()
            .iter()
            .map(|&id| self.services.get(id).ident.clone())
            .collect();
        idents.sort_by(|a, b| a.name.cmp(&b.name));
        check_facade_names(&idents)?;

        files.push(PreviewFile {
            path: format!("{SERVICES_DIR}/index.js"),
            content: ServicesIndexJs::new(idents.clone()).render(),
        });
        files.push(PreviewFile {
            path: "ApiManager.js".to_string(),
            content: ApiManagerJs::new(idents).render(),
        });
        if self.options.emit_instance {
            files.push(PreviewFile {
                path: "instance.js".to_string(),
                content: InstanceJs.render(),
            });
        }
        files.push(PreviewFile {
            path: "index.js".to_string(),
            content: IndexJs.render(),
        });

        Ok(files)
    }

    /// Generate all files into the specified output directory.
    fn generate_files(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut files = self.materialize(output_dir)?;
        let (services, aggregated) = self.aggregate(output_dir)?;
        files.extend(aggregated);

        info!(
            services = services.len(),
            files = files.len(),
            output = %output_dir.display(),
            "generated api client"
        );
        Ok(GenerateResult { services, files })
    }
}

/// Names of the sub-directories of `services_dir`, sorted.
///
/// Plain files (such as a previous barrel) are ignored.
pub fn list_services(services_dir: &Path) -> Result<Vec<String>, Error> {
    let unreadable = |source: std::io::Error| Error::ServicesDirUnreadable {
        path: services_dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(services_dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        if !entry.file_type().map_err(unreadable)?.is_dir() {
            continue;
        }
        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

fn check_facade_names(idents: &[Ident]) -> Result<(), Error> {
    match idents
        .iter()
        .find(|ident| API_MANAGER_MEMBERS.contains(&ident.name.as_str()))
    {
        Some(ident) => Err(Error::ReservedServiceName {
            name: ident.name.clone(),
        }),
        None => Ok(()),
    }
}
