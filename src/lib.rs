pub mod capability_engine;
pub mod capability_registry;
pub mod domain;
pub mod profile_loader;

pub use capability_registry::{CapabilityRegistry, RegistryError};
