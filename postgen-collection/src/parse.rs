//! Collection parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{Collection, Error, Result, error::SourceContext};

impl FromStr for Collection {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_collection(s, "collection.json")
    }
}

impl Collection {
    /// Parse a collection export from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_collection(&content, &path.display().to_string())
    }

    /// Parse a collection from a string with a custom name for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_collection(content, filename)
    }
}

/// Parse a collection from content with the given name for error reporting.
pub fn parse_collection(content: &str, filename: &str) -> Result<Collection> {
    let source_ctx = SourceContext::new(content, filename);
    serde_json::from_str(content).map_err(|e| source_ctx.parse_error(e))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::ItemKind;

    const USERS: &str = r#"{
        "info": { "name": "Shop API" },
        "item": [
            {
                "name": "Users",
                "item": [
                    {
                        "name": "users",
                        "request": { "method": "GET", "urlObject": { "path": ["users"] } }
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_nested_collection() {
        let collection: Collection = USERS.parse().unwrap();
        assert_eq!(collection.name(), Some("Shop API"));
        assert_eq!(collection.item.len(), 1);

        let ItemKind::Folder(children) = collection.item[0].kind() else {
            panic!("expected folder");
        };
        assert_eq!(children[0].name, "users");
        assert!(matches!(children[0].kind(), ItemKind::Request(_)));
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let collection: Collection =
            r#"{ "info": { "_postman_id": "x", "schema": "v2.1" }, "variable": [], "item": [] }"#
                .parse()
                .unwrap();
        assert!(collection.item.is_empty());
        assert_eq!(collection.name(), None);
    }

    #[test]
    fn test_parse_error_names_source() {
        let err = Collection::from_str_with_filename("{ \"item\": 42 }", "remote.json").unwrap_err();
        match *err {
            Error::Parse { src, .. } => assert_eq!(src.name(), "remote.json"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(USERS.as_bytes()).unwrap();

        let collection = Collection::from_file(file.path()).unwrap();
        assert_eq!(collection.item[0].name, "Users");
    }

    #[test]
    fn test_from_missing_file() {
        let err = Collection::from_file("/nonexistent/collection.json").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
