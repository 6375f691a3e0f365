//! Resolve phase - fills every module's import and composition slots.
//!
//! Runs in two passes over the service tree:
//!
//! 1. Composite services, depth-first: import the network-call helper plus
//!    every direct child, and compose every child factory.
//! 2. Every service still unresolved after pass 1 (the leaves): import only
//!    the helper and compose nothing.
//!
//! After both passes no slot is left unresolved.

use eyre::Result;

use crate::{
    pipeline::{CompilationContext, Phase},
    service::{Composition, ImportSpec, ServiceId, ServiceTree, SlotError},
};

/// Phase that resolves module slots.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Resolve service imports and composition"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        resolve(ctx.services_mut()?)?;
        Ok(())
    }
}

/// Resolve the slots of every service in the tree.
pub fn resolve(services: &mut ServiceTree) -> Result<(), SlotError> {
    for id in services.roots().to_vec() {
        resolve_composite(services, id)?;
    }

    for id in services.ids() {
        let service = services.get_mut(id);
        if service.slots.is_resolved() {
            continue;
        }
        let name = service.ident.name.clone();
        service
            .slots
            .imports
            .resolve(&name, vec![ImportSpec::HttpClient])?;
        service.slots.composition.resolve(&name, Vec::new())?;
    }

    Ok(())
}

fn resolve_composite(services: &mut ServiceTree, id: ServiceId) -> Result<(), SlotError> {
    if services.is_leaf(id) {
        return Ok(());
    }

    let children = services.get(id).children.clone();
    let child_names: Vec<String> = children
        .iter()
        .map(|&child| services.get(child).name().to_string())
        .collect();

    let imports = std::iter::once(ImportSpec::HttpClient)
        .chain(child_names.iter().map(|name| ImportSpec::child(name)))
        .collect();
    let composition = child_names
        .iter()
        .map(|name| Composition::child(name))
        .collect();

    let service = services.get_mut(id);
    let name = service.ident.name.clone();
    service.slots.imports.resolve(&name, imports)?;
    service.slots.composition.resolve(&name, composition)?;

    for child in children {
        resolve_composite(services, child)?;
    }
    Ok(())
}
