//! Errors raised by the CLI itself, as opposed to the library crates.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("cannot read config file '{}'", path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file '{}'", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },
    #[error("no collection source: pass a documenter path or --input <FILE>")]
    NoSource,
    #[error("refusing to use '{}' as the destination: {reason}", path.display())]
    UnusableDestination { path: PathBuf, reason: &'static str },
    /// Rendered with its source snippet by `main`.
    #[error(transparent)]
    Collection(Box<postgen_collection::Error>),
    #[error("Canceled")]
    Cancelled,
}
