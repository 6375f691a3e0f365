//! Canonical operation tree.

use indexmap::IndexMap;
use serde::Serialize;

use crate::Operation;

/// A node of the canonical tree: a nested folder or a leaf operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Folder(Folder),
    Operation(Operation),
}

impl Node {
    /// Returns the folder if this node is one.
    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            Node::Folder(folder) => Some(folder),
            Node::Operation(_) => None,
        }
    }

    /// Returns the operation if this node is one.
    pub fn as_operation(&self) -> Option<&Operation> {
        match self {
            Node::Operation(op) => Some(op),
            Node::Folder(_) => None,
        }
    }
}

/// An insertion-ordered mapping from sanitized names to nodes.
///
/// Keys are unique. Inserting an existing key replaces its node in place, so a
/// later entry wins while the first entry's position is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Folder {
    entries: IndexMap<String, Node>,
}

impl Folder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, returning the node it replaced, if any.
    pub fn insert(&mut self, key: impl Into<String>, node: Node) -> Option<Node> {
        self.entries.insert(key.into(), node)
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Direct child folders, in order.
    pub fn folders(&self) -> impl Iterator<Item = (&str, &Folder)> {
        self.iter()
            .filter_map(|(key, node)| node.as_folder().map(|folder| (key, folder)))
    }

    /// Direct child operations, in order.
    pub fn operations(&self) -> impl Iterator<Item = (&str, &Operation)> {
        self.iter()
            .filter_map(|(key, node)| node.as_operation().map(|op| (key, op)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count operations in this folder and all nested folders.
    pub fn operation_count(&self) -> usize {
        self.entries
            .values()
            .map(|node| match node {
                Node::Folder(folder) => folder.operation_count(),
                Node::Operation(_) => 1,
            })
            .sum()
    }
}

/// The canonical operation tree of a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OperationTree {
    root: Folder,
}

impl OperationTree {
    pub fn new(root: Folder) -> Self {
        Self { root }
    }

    /// The top-level mapping.
    pub fn root(&self) -> &Folder {
        &self.root
    }

    /// Total number of operations in the tree.
    pub fn operation_count(&self) -> usize {
        self.root.operation_count()
    }
}
