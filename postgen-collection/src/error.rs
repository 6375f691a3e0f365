use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for collection operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Keeps the raw payload and a display name (file path or URL) together so
/// parse errors can point into the offending JSON.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    name: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            name: name.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.src.clone())
    }

    /// Create a parse error from a serde_json error.
    pub fn parse_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = byte_offset(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from(offset..offset));
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }
}

/// Convert a 1-based line/column pair to a byte offset.
fn byte_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (index, text) in src.split_inclusive('\n').enumerate() {
        if index + 1 == line {
            let column = column.saturating_sub(1).min(text.len());
            return Some(offset + column);
        }
        offset += text.len();
    }
    Some(src.len())
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check that the collection file exists and is readable"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse collection")]
    #[diagnostic(code(postgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to fetch collection from '{url}'")]
    #[diagnostic(
        code(postgen::fetch_error),
        help("check the documenter path and your network connection")
    )]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("server answered {status} for '{url}'")]
    #[diagnostic(code(postgen::http_status))]
    Status { url: String, status: u16 },

    #[error("invalid collection source '{input}'")]
    #[diagnostic(
        code(postgen::invalid_source),
        help("pass a documenter path such as '/view/123/abc' or a full documenter URL")
    )]
    InvalidSource { input: String },
}
