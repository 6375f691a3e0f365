//! Services laid out for generation and their late-bound module slots.

mod slot;
mod tree;

pub use slot::{Composition, ImportSpec, ModuleSlots, Slot, SlotError, service_local};
pub use tree::{LayoutError, ROOT_REQUESTS, Service, ServiceId, ServiceTree};
