//! JavaScript file generators.

mod api_manager_js;
mod index_js;
mod instance_js;
mod service_index_js;
mod services_index_js;

pub use api_manager_js::{API_MANAGER_MEMBERS, ApiManagerJs};
pub use index_js::IndexJs;
pub use instance_js::InstanceJs;
pub use service_index_js::ServiceIndexJs;
pub use services_index_js::ServicesIndexJs;

/// Directory holding one sub-directory per top-level service.
pub const SERVICES_DIR: &str = "services";

/// Name of every generated module file.
pub const MODULE_FILE: &str = "index.js";
