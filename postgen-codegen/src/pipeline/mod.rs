//! Compilation pipeline for code generation.
//!
//! This module provides a [`Pipeline`] orchestrator that manages the
//! compilation phases from a parsed collection to a resolved service tree.
//! The pipeline provides:
//!
//! - Explicit phase boundaries (normalize → layout → resolve)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//! - Shared state via [`CompilationContext`]
//!
//! # Example
//!
//! ```ignore
//! use postgen_codegen::pipeline::{Pipeline, TracePlugin};
//!
//! let ctx = Pipeline::new().plugin(TracePlugin).run(collection)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("warning: {}", diag.message);
//! }
//!
//! let services = ctx.services()?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::{Plugin, TracePlugin};
pub use runner::Pipeline;
