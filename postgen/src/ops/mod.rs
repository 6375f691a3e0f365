//! Core operations.
//!
//! This module contains the business logic for postgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod tree;

pub use generate::{GenerateOptions, generate};
pub use tree::tree;
