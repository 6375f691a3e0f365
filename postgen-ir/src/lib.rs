//! Intermediate representation types for the postgen API client generator.
//!
//! This crate provides the canonical operation tree produced by normalizing a
//! raw collection. Generators consume it to lay out and emit service modules.
//!
//! # Architecture
//!
//! ```text
//! collection.json → postgen-collection (parsing) → postgen-ir (canonical tree) → codegen
//! ```
//!
//! The IR types are:
//! - Language-agnostic (no JavaScript-specific concerns)
//! - Keyed by sanitized names, insertion-ordered
//! - Self-contained (no I/O)

mod operation;
mod tree;

pub use operation::{Inputs, Operation, Param, ParamType};
pub use tree::{Folder, Node, OperationTree};
