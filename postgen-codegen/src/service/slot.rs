//! Typed module slots.
//!
//! A generated module has parts that are only known once the whole service
//! tree has been laid out: the imports of its child services and the
//! composition of their factories. Each such part is a [`Slot`] that starts
//! unresolved and is filled exactly once.

use thiserror::Error;

/// Errors raised when a slot is used out of order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("slot '{slot}' of service '{service}' is already resolved")]
    AlreadyResolved {
        slot: &'static str,
        service: String,
    },
    #[error("slot '{slot}' of service '{service}' was never resolved")]
    Unresolved {
        slot: &'static str,
        service: String,
    },
}

/// A named value that is set exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot<T> {
    name: &'static str,
    value: Option<T>,
}

impl<T> Slot<T> {
    /// Create an unresolved slot.
    pub fn new(name: &'static str) -> Self {
        Self { name, value: None }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_resolved(&self) -> bool {
        self.value.is_some()
    }

    /// Fill the slot. A second call fails and leaves the first value in place.
    pub fn resolve(&mut self, service: &str, value: T) -> Result<(), SlotError> {
        if self.value.is_some() {
            return Err(SlotError::AlreadyResolved {
                slot: self.name,
                service: service.to_string(),
            });
        }
        self.value = Some(value);
        Ok(())
    }

    /// Read the slot value.
    pub fn get(&self, service: &str) -> Result<&T, SlotError> {
        self.value.as_ref().ok_or_else(|| SlotError::Unresolved {
            slot: self.name,
            service: service.to_string(),
        })
    }
}

/// An import a service module needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSpec {
    /// The shared network-call helper.
    HttpClient,
    /// A child service factory.
    Service {
        /// Exported name in the child module.
        export: String,
        /// Local binding in the importing module.
        local: String,
        /// Relative module path (e.g. `./posts`).
        from: String,
    },
}

impl ImportSpec {
    /// Import of a direct child service.
    pub fn child(name: &str) -> Self {
        ImportSpec::Service {
            export: name.to_string(),
            local: service_local(name),
            from: format!("./{name}"),
        }
    }
}

/// One `key: childService()` member of a composite factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    /// Member key, the child's public name.
    pub key: String,
    /// Local binding of the imported child factory.
    pub local: String,
}

impl Composition {
    pub fn child(name: &str) -> Self {
        Self {
            key: name.to_string(),
            local: service_local(name),
        }
    }
}

/// Local binding for an imported child service (`posts` -> `postsService`).
pub fn service_local(name: &str) -> String {
    format!("{name}Service")
}

/// The two late-bound slots of a service module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSlots {
    pub imports: Slot<Vec<ImportSpec>>,
    pub composition: Slot<Vec<Composition>>,
}

impl ModuleSlots {
    pub fn is_resolved(&self) -> bool {
        self.imports.is_resolved() && self.composition.is_resolved()
    }
}

impl Default for ModuleSlots {
    fn default() -> Self {
        Self {
            imports: Slot::new("imports"),
            composition: Slot::new("composition"),
        }
    }
}
