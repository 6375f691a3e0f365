//! `instance.js` generator.

use std::path::{Path, PathBuf};

use postgen_core::GeneratedFile;

const INSTANCE: &str = include_str!("../assets/instance.js");

/// The shared axios instance every service module imports.
pub struct InstanceJs;

impl GeneratedFile for InstanceJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("instance.js")
    }

    fn render(&self) -> String {
        INSTANCE.to_string()
    }
}
