mod builtin;
mod factory;
mod loader;
mod serialized_save_controls;
mod series_deserializer;
mod source;
mod time_reference_pattern_deserializer;

pub use builtin::{builtin_profiles, builtin_save_controls};
pub use factory::{ProfileFactoryError, from_json, save_controls_from_json};
pub use loader::{LoaderError, load_profiles_from, load_save_controls_from};
pub use source::{BuiltinProfiles, DirectoryProfiles, ProfileSource};
