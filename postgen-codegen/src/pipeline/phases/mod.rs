//! Built-in pipeline phases.
//!
//! This module provides the standard phases that run in every pipeline:
//!
//! - [`NormalizePhase`] - turns the raw collection into an operation tree
//! - [`LayoutPhase`] - lays out services from the operation tree
//! - [`ResolvePhase`] - fills every module's import and composition slots

mod layout;
mod normalize;
mod resolve;

pub use layout::LayoutPhase;
pub use normalize::{NormalizePhase, normalize};
pub use resolve::{ResolvePhase, resolve};
