//! Errors raised while writing the aggregated modules.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot list services in '{}'", path.display())]
    ServicesDirUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("service '{name}' clashes with the ApiManager member of the same name")]
    ReservedServiceName { name: String },
}
