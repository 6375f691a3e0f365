//! Pipeline plugin trait for extensibility.

use eyre::Result;
use tracing::debug;

use super::CompilationContext;

/// A plugin that can hook into the compilation pipeline.
///
/// Plugins receive callbacks before and after each phase runs, allowing
/// them to inspect or modify the compilation context.
pub trait Plugin: Send + Sync {
    /// The name of this plugin (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Called before a phase runs.
    ///
    /// # Errors
    ///
    /// Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes successfully.
    ///
    /// # Errors
    ///
    /// Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}

/// Logs phase boundaries and what each phase produced.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracePlugin;

impl Plugin for TracePlugin {
    fn name(&self) -> &'static str {
        "trace"
    }

    fn on_before_phase(&self, phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
        debug!(phase, "phase started");
        Ok(())
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        debug!(
            phase,
            operations = ?ctx.tree.as_ref().map(|t| t.operation_count()),
            services = ?ctx.services.as_ref().map(|s| s.len()),
            diagnostics = ctx.diagnostics.len(),
            "phase finished"
        );
        Ok(())
    }
}
