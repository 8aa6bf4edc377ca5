//! Arbor Handle Registry
//!
//! Maps opaque handle strings to trees. The registry is an explicit value
//! owned by the caller, so independent registries can coexist.

mod error;
mod registry;

pub use error::{RegistryError, RegistryResult};
pub use registry::HandleRegistry;
