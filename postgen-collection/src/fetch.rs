//! Loading a collection from the documenter host or a local file.

use std::{path::PathBuf, time::Duration};

use tracing::{debug, info};

use crate::{Collection, Error, Result};

/// Host serving published collection exports.
pub const DEFAULT_HOST: &str = "documenter.gw.postman.com";

const USER_AGENT: &str = concat!("postgen/", env!("CARGO_PKG_VERSION"));

/// Where a collection is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// One HTTPS GET to `https://{host}{path}`.
    Remote { host: String, path: String },
    /// A collection JSON file on disk.
    File(PathBuf),
}

impl Source {
    /// Build a remote source from a documenter path or full URL.
    pub fn remote(host: impl Into<String>, input: &str) -> Result<Self> {
        Ok(Source::Remote {
            host: host.into(),
            path: documenter_path(input)?,
        })
    }

    /// Human-readable location, used in logs and reports.
    pub fn display(&self) -> String {
        match self {
            Source::Remote { host, path } => format!("https://{host}{path}"),
            Source::File(path) => path.display().to_string(),
        }
    }

    /// Read and parse the collection.
    pub fn load(&self) -> Result<Collection> {
        match self {
            Source::Remote { host, path } => {
                let body = fetch(host, path)?;
                Collection::from_str_with_filename(&body, &self.display())
            }
            Source::File(path) => {
                debug!(path = %path.display(), "reading collection file");
                Collection::from_file(path)
            }
        }
    }
}

/// Reduce user input to the path component of a documenter URL.
///
/// Accepts `/view/123/abc`, `view/123/abc` or a full `https://host/view/...`
/// URL. Whitespace-only input is rejected.
pub fn documenter_path(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Box::new(Error::InvalidSource {
            input: input.to_string(),
        }));
    }

    let path = match trimmed.split_once("://") {
        Some((_, rest)) => match rest.find('/') {
            Some(index) => &rest[index..],
            None => "",
        },
        None => trimmed,
    };

    if path.trim_matches('/').is_empty() {
        return Err(Box::new(Error::InvalidSource {
            input: input.to_string(),
        }));
    }

    if path.starts_with('/') {
        Ok(path.to_string())
    } else {
        Ok(format!("/{path}"))
    }
}

/// GET `https://{host}{path}` and buffer the whole body.
pub fn fetch(host: &str, path: &str) -> Result<String> {
    let url = format!("https://{host}{path}");
    info!(%url, "fetching collection");

    let fetch_error = |source: reqwest::Error| {
        Box::new(Error::Fetch {
            url: url.clone(),
            source,
        })
    };

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(60))
        .build()
        .map_err(fetch_error)?;

    let response = client.get(&url).send().map_err(fetch_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(Box::new(Error::Status {
            url: url.clone(),
            status: status.as_u16(),
        }));
    }

    let body = response.text().map_err(fetch_error)?;
    debug!(bytes = body.len(), "collection downloaded");
    Ok(body)
}
