//! Service tree arena.
//!
//! The output of a run is a tree of services: one per folder of the
//! operation tree, plus the synthetic [`ROOT_REQUESTS`] service collecting
//! operations that sit at the root. Services live in a flat arena and refer to
//! each other by [`ServiceId`], so the resolver can walk the tree twice while
//! mutating slots in place.

use std::path::PathBuf;

use postgen_ir::{Folder, Operation, OperationTree};
use thiserror::Error;

use super::ModuleSlots;
use crate::naming::{Ident, NamingConvention};

/// Name of the synthetic service holding root-level operations.
pub const ROOT_REQUESTS: &str = "rootRequests";

/// Errors raised while laying out the service tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error(
        "folder '{name}' clashes with the service generated for root-level requests"
    )]
    DuplicateService { name: String },
}

/// Index of a service in a [`ServiceTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServiceId(usize);

impl ServiceId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One generated service module.
#[derive(Debug, Clone)]
pub struct Service {
    /// Public name (directory and export) and module-local binding.
    pub ident: Ident,
    pub parent: Option<ServiceId>,
    /// Sub-services, in folder order.
    pub children: Vec<ServiceId>,
    /// Operations found directly under the folder, keyed by member name.
    pub operations: Vec<(String, Operation)>,
    /// Late-bound imports and composition.
    pub slots: ModuleSlots,
}

impl Service {
    pub fn name(&self) -> &str {
        &self.ident.name
    }
}

/// Arena of services built once from an [`OperationTree`].
#[derive(Debug, Clone, Default)]
pub struct ServiceTree {
    services: Vec<Service>,
    roots: Vec<ServiceId>,
}

impl ServiceTree {
    /// Lay out services for an operation tree.
    ///
    /// Top-level folders become services in order; root-level operations are
    /// then grouped under [`ROOT_REQUESTS`].
    pub fn layout(tree: &OperationTree, naming: &NamingConvention) -> Result<Self, LayoutError> {
        let mut services = Self::default();
        let root = tree.root();

        for (key, folder) in root.folders() {
            let id = services.add_folder(key, None, folder, naming);
            services.roots.push(id);
        }

        let root_operations: Vec<_> = root
            .operations()
            .map(|(key, op)| (key.to_string(), op.clone()))
            .collect();
        if !root_operations.is_empty() {
            if root.folders().any(|(key, _)| key == ROOT_REQUESTS) {
                return Err(LayoutError::DuplicateService {
                    name: ROOT_REQUESTS.to_string(),
                });
            }
            let id = services.push(Service {
                ident: naming.ident(ROOT_REQUESTS),
                parent: None,
                children: Vec::new(),
                operations: root_operations,
                slots: ModuleSlots::default(),
            });
            services.roots.push(id);
        }

        Ok(services)
    }

    fn add_folder(
        &mut self,
        key: &str,
        parent: Option<ServiceId>,
        folder: &Folder,
        naming: &NamingConvention,
    ) -> ServiceId {
        let id = self.push(Service {
            ident: naming.ident(key),
            parent,
            children: Vec::new(),
            operations: folder
                .operations()
                .map(|(key, op)| (key.to_string(), op.clone()))
                .collect(),
            slots: ModuleSlots::default(),
        });

        for (child_key, child) in folder.folders() {
            let child_id = self.add_folder(child_key, Some(id), child, naming);
            self.services[id.0].children.push(child_id);
        }
        id
    }

    fn push(&mut self, service: Service) -> ServiceId {
        let id = ServiceId(self.services.len());
        self.services.push(service);
        id
    }

    /// Top-level services, in layout order.
    pub fn roots(&self) -> &[ServiceId] {
        &self.roots
    }

    pub fn get(&self, id: ServiceId) -> &Service {
        &self.services[id.0]
    }

    pub fn get_mut(&mut self, id: ServiceId) -> &mut Service {
        &mut self.services[id.0]
    }

    /// All service ids, parents before their children.
    pub fn ids(&self) -> impl Iterator<Item = ServiceId> + use<> {
        (0..self.services.len()).map(ServiceId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ServiceId, &Service)> {
        self.services
            .iter()
            .enumerate()
            .map(|(index, service)| (ServiceId(index), service))
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Number of module files at or below a service directory.
    pub fn module_count(&self, id: ServiceId) -> usize {
        1 + self
            .get(id)
            .children
            .iter()
            .map(|&child| self.module_count(child))
            .sum::<usize>()
    }

    /// A service whose directory holds exactly one module file is a leaf and
    /// never imports sub-services. Anything else is composite.
    pub fn is_leaf(&self, id: ServiceId) -> bool {
        self.module_count(id) == 1
    }

    /// Public names from the top-level service down to `id`.
    pub fn path(&self, id: ServiceId) -> Vec<&str> {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(id) = current {
            let service = self.get(id);
            names.push(service.name());
            current = service.parent;
        }
        names.reverse();
        names
    }

    /// Directory of a service relative to the services directory.
    pub fn dir(&self, id: ServiceId) -> PathBuf {
        self.path(id).into_iter().collect()
    }

    /// Total number of operations across all services.
    pub fn operation_count(&self) -> usize {
        self.services.iter().map(|s| s.operations.len()).sum()
    }
}
