//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for language-specific API client generators.
///
/// Implement this trait to add support for emitting the client in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "javascript", "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "js", "ts")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Top-level services found in the written services directory
    pub services: Vec<String>,
    /// Every file that was written, in write order
    pub files: Vec<PathBuf>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
