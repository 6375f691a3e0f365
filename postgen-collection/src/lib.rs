//! Collection parsing and fetching for the postgen API client generator.
//!
//! A collection is the JSON export of an API documentation tool: a tree of
//! named folders whose leaves are request definitions.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod fetch;
mod model;
mod parse;

pub use error::{Error, Result, SourceContext};
pub use fetch::{DEFAULT_HOST, Source, documenter_path, fetch};
pub use model::{
    Body, Collection, Description, FormField, Info, Item, ItemKind, QueryParam, Request, Url,
};
pub use parse::parse_collection;
