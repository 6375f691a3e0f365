use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, returning the path that was written
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.render())?;
        Ok(path)
    }
}

/// Write UTF-8 text to `path`, creating missing parent directories.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content.as_bytes())
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))
}
