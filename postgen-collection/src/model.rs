//! Raw collection model.
//!
//! Mirrors the JSON exported by the API documenter. Only the parts the
//! generator reads are modelled; unknown keys are ignored.

use serde::Deserialize;

/// Root of a collection. The root behaves like a folder.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub info: Option<Info>,
    #[serde(default)]
    pub item: Vec<Item>,
}

/// Collection metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub name: Option<String>,
}

impl Collection {
    /// Collection name, if the export carries one.
    pub fn name(&self) -> Option<&str> {
        self.info.as_ref().and_then(|info| info.name.as_deref())
    }
}

/// A node of the raw tree: a folder when it has `item`, otherwise a request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub item: Option<Vec<Item>>,
    #[serde(default)]
    pub request: Option<Request>,
}

/// Borrowed view of what an [`Item`] is.
#[derive(Debug, Clone, Copy)]
pub enum ItemKind<'a> {
    Folder(&'a [Item]),
    Request(&'a Request),
    Empty,
}

impl Item {
    /// Children take precedence: an item with `item` is a folder even when empty.
    pub fn kind(&self) -> ItemKind<'_> {
        match (&self.item, &self.request) {
            (Some(children), _) => ItemKind::Folder(children),
            (None, Some(request)) => ItemKind::Request(request),
            (None, None) => ItemKind::Empty,
        }
    }
}

/// A request definition.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RawRequest")]
pub struct Request {
    pub method: Option<String>,
    pub url: Option<Url>,
    pub body: Option<Body>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRequest {
    Url(String),
    Full {
        #[serde(default)]
        method: Option<String>,
        #[serde(default, rename = "urlObject")]
        url_object: Option<Url>,
        #[serde(default)]
        url: Option<Url>,
        #[serde(default)]
        body: Option<Body>,
    },
}

impl From<RawRequest> for Request {
    fn from(raw: RawRequest) -> Self {
        match raw {
            RawRequest::Url(raw) => Request {
                method: Some("GET".to_string()),
                url: Some(Url::parse(&raw)),
                body: None,
            },
            RawRequest::Full {
                method,
                url_object,
                url,
                body,
            } => Request {
                method,
                url: url_object.or(url),
                body,
            },
        }
    }
}

/// A request URL split into path segments and query parameters.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawUrl")]
pub struct Url {
    pub path: Vec<String>,
    pub query: Vec<QueryParam>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawUrl {
    Raw(String),
    Object {
        #[serde(default)]
        path: Option<RawPath>,
        #[serde(default)]
        query: Option<Vec<QueryParam>>,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPath {
    Joined(String),
    Segments(Vec<PathSegment>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PathSegment {
    Text(String),
    Variable { value: String },
}

impl From<RawUrl> for Url {
    fn from(raw: RawUrl) -> Self {
        match raw {
            RawUrl::Raw(raw) => Url::parse(&raw),
            RawUrl::Object { path, query } => {
                let path = match path {
                    None => Vec::new(),
                    Some(RawPath::Joined(joined)) => split_path(&joined),
                    Some(RawPath::Segments(segments)) => segments
                        .into_iter()
                        .map(|segment| match segment {
                            PathSegment::Text(text) => text,
                            PathSegment::Variable { value } => value,
                        })
                        .collect(),
                };
                Url {
                    path,
                    query: query.unwrap_or_default(),
                }
            }
        }
    }
}

impl Url {
    /// Parse a raw URL such as `{{baseUrl}}/users/:id?page=1`.
    ///
    /// The first segment is the host unless the URL starts with `/`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.split('#').next().unwrap_or_default();
        let (location, query) = match raw.split_once('?') {
            Some((location, query)) => (location, Some(query)),
            None => (raw, None),
        };
        let location = match location.split_once("://") {
            Some((_, rest)) => rest,
            None => location,
        };
        let path = match location.strip_prefix('/') {
            Some(path) => split_path(path),
            None => location
                .split_once('/')
                .map(|(_, path)| split_path(path))
                .unwrap_or_default(),
        };
        let query = query
            .map(|query| {
                query
                    .split('&')
                    .filter(|pair| !pair.is_empty())
                    .map(|pair| QueryParam {
                        key: Some(pair.split('=').next().unwrap_or(pair).to_string()),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Url { path, query }
    }

    /// Path segments joined with `/`.
    pub fn endpoint(&self) -> String {
        self.path.join("/")
    }
}

fn split_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// A query parameter.
///
/// Disabled parameters are kept: they are still part of the documented
/// request and become optional arguments like any other.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueryParam {
    #[serde(default)]
    pub key: Option<String>,
}

/// A request body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub formdata: Option<Vec<FormField>>,
    #[serde(default)]
    pub urlencoded: Option<Vec<FormField>>,
}

impl Body {
    /// Form fields of a multipart or urlencoded body.
    ///
    /// A present but empty list still counts as a form body.
    pub fn form_fields(&self) -> Option<&[FormField]> {
        self.formdata
            .as_deref()
            .or(self.urlencoded.as_deref())
    }
}

/// A form body field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FormField {
    pub key: String,
    #[serde(default)]
    pub description: Option<Description>,
}

impl FormField {
    /// Description text, or the empty string.
    pub fn description(&self) -> &str {
        self.description.as_ref().map(Description::text).unwrap_or("")
    }
}

/// Free-text description, plain or wrapped in a content object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Rich { content: String },
}

impl Description {
    pub fn text(&self) -> &str {
        match self {
            Description::Text(text) => text,
            Description::Rich { content } => content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> Request {
        serde_json::from_str(json).expect("Failed to parse request")
    }

    #[test]
    fn test_documenter_url_object() {
        let req = request(
            r#"{
                "method": "GET",
                "url": "https://api.example.com/v1/users?page=1",
                "urlObject": {
                    "path": ["v1", "users"],
                    "query": [{ "key": "page", "value": "1" }]
                }
            }"#,
        );
        let url = req.url.unwrap();
        assert_eq!(url.endpoint(), "v1/users");
        assert_eq!(url.query.len(), 1);
        assert_eq!(url.query[0].key.as_deref(), Some("page"));
    }

    #[test]
    fn test_disabled_query_param_is_kept() {
        let req = request(
            r#"{
                "method": "GET",
                "urlObject": {
                    "path": ["users"],
                    "query": [
                        { "key": "page", "description": "Page number" },
                        { "key": "sort", "disabled": true }
                    ]
                }
            }"#,
        );
        let keys: Vec<_> = req
            .url
            .unwrap()
            .query
            .iter()
            .filter_map(|q| q.key.clone())
            .collect();
        assert_eq!(keys, ["page", "sort"]);
    }

    #[test]
    fn test_url_object_with_variable_segments() {
        let req = request(
            r#"{ "method": "GET", "url": { "path": ["users", { "type": "any", "value": ":id" }] } }"#,
        );
        assert_eq!(req.url.unwrap().endpoint(), "users/:id");
    }

    #[test]
    fn test_raw_url_string() {
        let url = Url::parse("{{baseUrl}}/users/:id/posts?limit=10&offset");
        assert_eq!(url.path, vec!["users", ":id", "posts"]);
        let keys: Vec<_> = url.query.iter().filter_map(|q| q.key.as_deref()).collect();
        assert_eq!(keys, vec!["limit", "offset"]);
    }

    #[test]
    fn test_raw_url_without_path() {
        assert!(Url::parse("https://api.example.com").path.is_empty());
        assert!(Url::parse("").path.is_empty());
        assert_eq!(Url::parse("/health").path, vec!["health"]);
    }

    #[test]
    fn test_request_as_plain_string() {
        let req = request(r#""https://api.example.com/status""#);
        assert_eq!(req.method.as_deref(), Some("GET"));
        assert_eq!(req.url.unwrap().endpoint(), "status");
    }

    #[test]
    fn test_form_fields_prefer_formdata() {
        let body: Body = serde_json::from_str(
            r#"{
                "mode": "formdata",
                "formdata": [{ "key": "name", "description": "required string", "type": "text" }]
            }"#,
        )
        .unwrap();
        let fields = body.form_fields().unwrap();
        assert_eq!(fields[0].key, "name");
        assert_eq!(fields[0].description(), "required string");
    }

    #[test]
    fn test_empty_formdata_is_still_a_form() {
        let body: Body = serde_json::from_str(r#"{ "formdata": [] }"#).unwrap();
        assert_eq!(body.form_fields().map(<[FormField]>::len), Some(0));
    }

    #[test]
    fn test_rich_description() {
        let field: FormField =
            serde_json::from_str(r#"{ "key": "age", "description": { "content": "int" } }"#)
                .unwrap();
        assert_eq!(field.description(), "int");
    }

    #[test]
    fn test_item_kind() {
        let folder: Item = serde_json::from_str(r#"{ "name": "Users", "item": [] }"#).unwrap();
        assert!(matches!(folder.kind(), ItemKind::Folder(children) if children.is_empty()));

        let empty: Item = serde_json::from_str(r#"{ "name": "Nothing" }"#).unwrap();
        assert!(matches!(empty.kind(), ItemKind::Empty));
    }
}
