//! Shared code generation utilities for the postgen API client generator.
//!
//! This crate provides the language-agnostic part of generation: turning a
//! parsed collection into a resolved tree of services that a language
//! backend (e.g., `postgen-codegen-javascript`) renders to files.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`naming`] - Name sanitization and reserved-word escaping
//! - [`pipeline`] - Compilation phases (normalize → layout → resolve) and diagnostics
//! - [`service`] - Service tree arena and typed module slots

pub mod builder;
pub mod naming;
pub mod pipeline;
pub mod service;
