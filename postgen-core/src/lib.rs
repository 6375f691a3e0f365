//! Core utilities and types for the postgen API client generator.
//!
//! This crate provides fundamental types and utilities used across
//! the postgen workspace.

mod codegen;
mod file;
mod utils;

// Code generation traits
pub use codegen::{GenerateResult, LanguageCodegen, PreviewFile};
// File operations
pub use file::{GeneratedFile, write_file};
// String utilities
pub use utils::{to_camel_case, transliterate_cyrillic, uppercase_first};
