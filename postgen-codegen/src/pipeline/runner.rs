//! Pipeline orchestrator.

use eyre::Result;
use postgen_collection::Collection;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{LayoutPhase, NormalizePhase, ResolvePhase},
};

/// The compilation pipeline orchestrator.
///
/// The pipeline manages the execution of compilation phases and plugin hooks.
/// It runs built-in phases (normalize, layout, resolve) followed by any user
/// phases, calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(TracePlugin)
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(collection)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with default built-in phases.
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on a collection.
    ///
    /// Executes all phases in order:
    /// 1. NormalizePhase - builds the operation tree
    /// 2. LayoutPhase - lays out the service tree
    /// 3. ResolvePhase - resolves module slots
    /// 4. User phases (if any)
    ///
    /// Plugin hooks are called before and after each phase.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(&self, collection: Collection) -> Result<CompilationContext> {
        let ctx = CompilationContext::new(collection);
        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(NormalizePhase::default()),
            Box::new(LayoutPhase::default()),
            Box::new(ResolvePhase),
        ];
        self.run_phases(ctx, &builtin_phases)
    }

    /// Run only normalization, for inspecting the operation tree.
    pub fn normalize(&self, collection: Collection) -> Result<CompilationContext> {
        let ctx = CompilationContext::new(collection);
        let builtin_phases: Vec<Box<dyn Phase>> = vec![Box::new(NormalizePhase::default())];
        self.run_phases(ctx, &builtin_phases)
    }

    fn run_phases(
        &self,
        mut ctx: CompilationContext,
        builtin_phases: &[Box<dyn Phase>],
    ) -> Result<CompilationContext> {
        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }
        Ok(ctx)
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    struct CountingPlugin {
        before_count: Arc<AtomicUsize>,
        after_count: Arc<AtomicUsize>,
    }

    impl CountingPlugin {
        fn new() -> (Self, Arc<AtomicUsize>, Arc<AtomicUsize>) {
            let before = Arc::new(AtomicUsize::new(0));
            let after = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    before_count: before.clone(),
                    after_count: after.clone(),
                },
                before,
                after,
            )
        }
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct RecordingPhase(Arc<Mutex<Vec<usize>>>);

    impl Phase for RecordingPhase {
        fn name(&self) -> &'static str {
            "record"
        }

        fn description(&self) -> &'static str {
            "Record the number of services"
        }

        fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
            let count = ctx.services()?.len();
            self.0.lock().unwrap().push(count);
            Ok(())
        }
    }

    fn collection() -> Collection {
        r#"{ "item": [{ "name": "Users", "item": [
            { "name": "list", "request": { "method": "GET", "url": "{{base}}/users" } }
        ] }] }"#
            .parse()
            .unwrap()
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let ctx = Pipeline::new().run(collection()).expect("pipeline should succeed");

        assert!(ctx.tree.is_some());
        let services = ctx.services().unwrap();
        assert_eq!(services.len(), 1);
        assert!(services.iter().all(|(_, s)| s.slots.is_resolved()));
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let (plugin, before_count, after_count) = CountingPlugin::new();

        let pipeline = Pipeline::new().plugin(plugin);
        let _ = pipeline.run(collection()).expect("pipeline should succeed");

        // 3 built-in phases = 3 before + 3 after hooks
        assert_eq!(before_count.load(Ordering::SeqCst), 3);
        assert_eq!(after_count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_user_phase_runs_last() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let pipeline = Pipeline::new().phase(RecordingPhase(seen.clone()));
        pipeline.run(collection()).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![1]);
    }

    #[test]
    fn test_normalize_only() {
        let ctx = Pipeline::new().normalize(collection()).unwrap();
        assert_eq!(ctx.tree().unwrap().operation_count(), 1);
        assert!(ctx.services.is_none());
    }
}
