//! Compilation context passed through pipeline phases.

use eyre::{Result, eyre};
use postgen_collection::Collection;
use postgen_ir::OperationTree;

use super::diagnostic::Diagnostic;
use crate::service::ServiceTree;

/// Context passed through all pipeline phases.
///
/// This struct carries the state of compilation through each phase,
/// accumulating results and diagnostics along the way.
#[derive(Debug)]
pub struct CompilationContext {
    /// The raw collection being compiled.
    pub collection: Collection,
    /// The canonical operation tree (populated by NormalizePhase).
    pub tree: Option<OperationTree>,
    /// The service tree (populated by LayoutPhase, resolved by ResolvePhase).
    pub services: Option<ServiceTree>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new compilation context from a collection.
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            tree: None,
            services: None,
            diagnostics: Vec::new(),
        }
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
    }

    /// The operation tree.
    ///
    /// # Errors
    ///
    /// Fails if NormalizePhase hasn't run.
    pub fn tree(&self) -> Result<&OperationTree> {
        self.tree
            .as_ref()
            .ok_or_else(|| eyre!("operation tree not set - did NormalizePhase run?"))
    }

    /// The service tree.
    ///
    /// # Errors
    ///
    /// Fails if LayoutPhase hasn't run.
    pub fn services(&self) -> Result<&ServiceTree> {
        self.services
            .as_ref()
            .ok_or_else(|| eyre!("service tree not set - did LayoutPhase run?"))
    }

    /// Mutable access to the service tree.
    pub fn services_mut(&mut self) -> Result<&mut ServiceTree> {
        self.services
            .as_mut()
            .ok_or_else(|| eyre!("service tree not set - did LayoutPhase run?"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_creation() {
        let ctx = CompilationContext::new(Collection::default());

        assert!(ctx.tree.is_none());
        assert!(ctx.services.is_none());
        assert!(ctx.diagnostics.is_empty());
        assert!(ctx.tree().is_err());
        assert!(ctx.services().is_err());
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = CompilationContext::new(Collection::default());

        ctx.diagnostics
            .push(Diagnostic::warning("normalize", "key collision").at("Users/List"));
        ctx.diagnostics
            .push(Diagnostic::info("normalize", "request dropped").at("Users/Broken"));

        let warnings: Vec<_> = ctx.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].location.as_deref(), Some("Users/List"));
    }
}
