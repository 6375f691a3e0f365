//! `postgen.toml` loading.
//!
//! Every key is optional. A missing file at the default location means all
//! defaults; a file named with `--config` must exist.

use std::path::{Path, PathBuf};

use postgen_codegen_javascript::{DEFAULT_FORMAT_COMMAND, DEFAULT_HTTP_CLIENT_MODULE, JsOptions};
use postgen_collection::DEFAULT_HOST;
use serde::Deserialize;
use tracing::debug;

use crate::error::RunError;

/// Default config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "postgen.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub source: SourceConfig,
    pub output: OutputConfig,
    pub format: FormatConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// Host serving collection exports.
    pub host: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Destination used when none is given or the prompt is left empty.
    pub default_dir: PathBuf,
    /// Module the generated services import the HTTP client from.
    pub http_client_module: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_dir: PathBuf::from("./src/api"),
            http_client_module: DEFAULT_HTTP_CLIENT_MODULE.to_string(),
        }
    }
}

impl OutputConfig {
    /// JavaScript options for this output.
    ///
    /// `instance.js` is only written when services import the bundled client.
    pub fn js_options(&self) -> JsOptions {
        JsOptions {
            http_client_module: self.http_client_module.clone(),
            emit_instance: self.http_client_module == DEFAULT_HTTP_CLIENT_MODULE,
            ..JsOptions::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    pub enabled: bool,
    /// Formatter program and arguments; the file glob is appended.
    pub command: Vec<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: DEFAULT_FORMAT_COMMAND.iter().map(|arg| arg.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load the config named on the command line, or `postgen.toml` if present.
    pub fn load(explicit: Option<&Path>) -> Result<Self, RunError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(CONFIG_FILE);
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    debug!("no {CONFIG_FILE} found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, RunError> {
        let content = std::fs::read_to_string(path).map_err(|source| RunError::ConfigUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, RunError> {
        toml::from_str(content).map_err(|source| RunError::Config {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    }
}
