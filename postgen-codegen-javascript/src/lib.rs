//! JavaScript code generator for the postgen API client generator.
//!
//! This crate renders a resolved service tree as ES modules that call a
//! shared [axios](https://axios-http.com/) instance.
//!
//! # Usage
//!
//! This crate is used internally by the `postgen` CLI tool. You typically don't
//! need to use it directly.
//!
//! ```ignore
//! use postgen_codegen::pipeline::Pipeline;
//! use postgen_codegen_javascript::Generator;
//! use postgen_core::LanguageCodegen;
//! use std::path::Path;
//!
//! let ctx = Pipeline::new().run(collection)?;
//! let generator = Generator::from_context(ctx)?;
//!
//! // Preview files without writing
//! let files = generator.preview()?;
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("src/api"))?;
//! ```
//!
//! # Generated Output
//!
//! - `services/<path>/index.js` - One factory per folder of the collection
//! - `services/index.js` - Barrel re-exporting every top-level service
//! - `ApiManager.js` - Facade exposing each service as a getter
//! - `instance.js` - The shared axios instance
//! - `index.js` - Package entry point

mod code_file;
mod error;
mod format;
mod generator;
mod operation;

pub mod ast;
pub mod files;

pub use ast::{ArrowFn, Export, Import, JsObject};
pub use code_file::{CodeFile, RawCode};
pub use error::Error;
pub use format::{DEFAULT_FORMAT_COMMAND, Formatter};
pub use generator::{DEFAULT_HTTP_CLIENT_MODULE, Generator, JsOptions, list_services};
pub use operation::OperationTemplate;
pub use postgen_core::{GenerateResult, LanguageCodegen, PreviewFile};
