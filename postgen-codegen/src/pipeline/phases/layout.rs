//! Layout phase - lays out services from the operation tree.

use eyre::Result;

use crate::{
    naming::{JAVASCRIPT_NAMING, NamingConvention},
    pipeline::{CompilationContext, Phase},
    service::ServiceTree,
};

/// Phase that builds the [`ServiceTree`] arena.
#[derive(Debug, Clone, Copy)]
pub struct LayoutPhase {
    naming: NamingConvention,
}

impl LayoutPhase {
    pub fn new(naming: NamingConvention) -> Self {
        Self { naming }
    }
}

impl Default for LayoutPhase {
    fn default() -> Self {
        Self::new(JAVASCRIPT_NAMING)
    }
}

impl Phase for LayoutPhase {
    fn name(&self) -> &'static str {
        "layout"
    }

    fn description(&self) -> &'static str {
        "Lay out one service per folder"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let services = ServiceTree::layout(ctx.tree()?, &self.naming)?;
        ctx.services = Some(services);
        Ok(())
    }
}
